use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::metadata::Metadata;

/// A Markdown source file found in the posts directory.
#[derive(Debug, Clone)]
pub(crate) struct Article {
    /// File name without `.md`; doubles as the article id.
    pub id: String,
    pub path: PathBuf,
}

impl Article {
    pub fn file_name(&self) -> String {
        format!("{}.html", self.id)
    }
}

/// One object of `posts.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndexEntry {
    pub id: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub excerpt: String,
    pub file: String,
}

impl IndexEntry {
    pub fn new(id: &str, meta: &Metadata) -> Self {
        Self {
            id: id.to_string(),
            title: meta.title().to_string(),
            date: meta.date().to_string(),
            category: meta.category().to_string(),
            excerpt: meta.excerpt().to_string(),
            file: format!("{id}.html"),
        }
    }
}
