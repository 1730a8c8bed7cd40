use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// File layout of one blog project.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub posts_dir: PathBuf,
    pub out_dir: PathBuf,
    pub template_path: PathBuf,
    pub index_path: PathBuf,
}

impl Context {
    /// Layout under `root`: articles in `blog/posts`, everything generated in `blog`.
    pub fn from_root(root: &Path) -> Self {
        let blog_dir = root.join("blog");
        Self {
            posts_dir: blog_dir.join("posts"),
            template_path: blog_dir.join("_template.html"),
            index_path: blog_dir.join("posts.json"),
            out_dir: blog_dir,
        }
    }

    pub fn load_template(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.template_path)
            .with_context(|| format!("while loading template {:?}", self.template_path))
    }
}
