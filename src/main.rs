use std::path::PathBuf;

use anyhow::Context as _;
use clap::{command, Arg};
use log::info;

use context::Context;
use generator::{generate, BuildReport};

mod context;
mod generator;
mod index;
mod markdown;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = command!()
        .arg(
            Arg::new("root")
                .help("Project root containing blog/posts and blog/_template.html")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("."),
        )
        .get_matches();

    let root: &PathBuf = matches.get_one::<PathBuf>("root").context("root")?;
    info!("Starting blog build...");
    let ctx = Context::from_root(root);
    match generate(&ctx)? {
        BuildReport::Built { articles } => info!("Blog build finished ({articles} articles)"),
        BuildReport::MissingSourceDir | BuildReport::NoDocuments => {
            info!("Blog build finished without changes")
        }
    }

    Ok(())
}
