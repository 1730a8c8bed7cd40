use std::{cmp::Ordering, path::Path};

use anyhow::Context;
use chrono::NaiveDate;
use log::{debug, warn};

use crate::metadata::Metadata;

use super::data::Article;

/// Newest first, assuming date-prefixed file names.
pub(super) fn sort_article(a: &Article, b: &Article) -> Ordering {
    b.path.file_name().cmp(&a.path.file_name())
}

/// Markdown files directly inside `posts_dir`, in index order.
pub(super) fn collect_articles(posts_dir: &Path) -> anyhow::Result<Vec<Article>> {
    let mut articles = vec![];
    for entry in std::fs::read_dir(posts_dir)
        .with_context(|| format!("while listing {posts_dir:?}"))?
    {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "md") {
            debug!("Skipping {path:?}");
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        articles.push(Article {
            id: stem.to_string_lossy().to_string(),
            path,
        });
    }
    articles.sort_by(sort_article);

    Ok(articles)
}

/// The listing page shows dates as `YYYY.MM.DD` and expects `YYYY-MM-DD` here.
pub(super) fn check_date(article: &Article, meta: &Metadata) {
    let date = meta.date();
    if date.is_empty() {
        warn!("{:?} has no date", article.path);
    } else if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        warn!("{:?} has an unexpected date format: {date:?}", article.path);
    }
}
