pub(crate) mod data;
mod utils;

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
};

use anyhow::Context as _;
use log::{info, warn};

use crate::{
    context::Context, index::save_index, markdown::markdown_to_html, metadata::parse_frontmatter,
    renderer::compose_page,
};

use data::{Article, IndexEntry};
use utils::{check_date, collect_articles};

/// How a build run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuildReport {
    /// The posts directory does not exist; nothing was written.
    MissingSourceDir,
    /// The posts directory holds no Markdown files; nothing was written.
    NoDocuments,
    Built { articles: usize },
}

fn generate_article(ctx: &Context, template: &str, article: &Article) -> anyhow::Result<IndexEntry> {
    info!("Processing {:?}", article.path);
    let content = std::fs::read_to_string(&article.path)
        .with_context(|| format!("while reading {:?}", article.path))?;

    let (meta, body) = parse_frontmatter(&content);
    if meta.is_empty() {
        warn!("{:?} has no frontmatter", article.path);
    }
    check_date(article, &meta);
    let body_html = markdown_to_html(body);
    let page = compose_page(template, &meta, &body_html);

    // out
    let out_path = ctx.out_dir.join(article.file_name());
    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&out_path)
        .with_context(|| format!("while writing {out_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    writer
        .write_all(page.as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("while writing {out_path:?}"))?;
    info!("Generated {out_path:?}");

    Ok(IndexEntry::new(&article.id, &meta))
}

/// Builds every article page and the article index.
///
/// Stops at the first I/O error; pages written before it are left in place.
pub(crate) fn generate(ctx: &Context) -> anyhow::Result<BuildReport> {
    if !ctx.posts_dir.is_dir() {
        warn!("{:?} does not exist", ctx.posts_dir);
        return Ok(BuildReport::MissingSourceDir);
    }

    let articles = collect_articles(&ctx.posts_dir)?;
    if articles.is_empty() {
        warn!("No .md files in {:?}", ctx.posts_dir);
        return Ok(BuildReport::NoDocuments);
    }

    let template = ctx.load_template()?;
    fs_extra::dir::create_all(&ctx.out_dir, false)?;

    let mut index = Vec::with_capacity(articles.len());
    for article in articles.iter() {
        index.push(generate_article(ctx, &template, article)?);
    }

    save_index(&ctx.index_path, &index)?;
    info!("Done! processed {} articles", index.len());

    Ok(BuildReport::Built {
        articles: index.len(),
    })
}
