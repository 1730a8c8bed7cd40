//! Fills the blog article template with one article's content.
//!
//! The template is the hand-written `_template.html` sample page, so the
//! placeholders are literal snippets of that page rather than tokens. An
//! edited snippet no longer matches and stays in the output unchanged.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::metadata::Metadata;

const TITLE: &str = "<title>記事タイトル | bravebird Blog</title>";
const DESCRIPTION: &str = "content=\"記事の説明文をここに記入してください。\"";
const DATE: &str = "<span class=\"blog-article-date\">2024.12.XX</span>";
const CATEGORY: &str = "<span class=\"blog-article-category\">カテゴリー名</span>";
const HEADING: &str = "<h1 class=\"blog-article-title\">記事タイトルをここに入力</h1>";
const EXCERPT: &str = concat!(
    "<p class=\"blog-article-excerpt\">\n",
    "          記事の導入文や要約をここに書きます。読者の興味を引く内容で始めましょう。\n",
    "        </p>",
);
const CONTENT: &str = concat!(
    "<div class=\"blog-article-content\">\n",
    "        <p>\n",
    "          記事の本文をここに書きます。\n",
    "        </p>",
);

// sample sections of the template, from the first sample heading through the closing summary
static SAMPLE_SECTIONS: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(
        r"<h2>見出し2（大見出し）</h2>.*?<h2>まとめ</h2>\s*<p>\s*記事のまとめをここに書きます。\s*</p>",
    )
    .dot_matches_new_line(true)
    .build()
    .unwrap()
});

fn replace_placeholder(html: String, placeholder: &str, replacement: &str) -> String {
    if !html.contains(placeholder) {
        warn!("Template placeholder not found, leaving it as is: {placeholder:?}");
        return html;
    }
    html.replace(placeholder, replacement)
}

/// Builds the complete page for one article.
pub(crate) fn compose_page(template: &str, meta: &Metadata, body_html: &str) -> String {
    let replacements = [
        (TITLE, format!("<title>{} | bravebird Blog</title>", meta.title())),
        (DESCRIPTION, format!("content=\"{}\"", meta.excerpt())),
        (DATE, format!("<span class=\"blog-article-date\">{}</span>", meta.date())),
        (
            CATEGORY,
            format!("<span class=\"blog-article-category\">{}</span>", meta.category()),
        ),
        (HEADING, format!("<h1 class=\"blog-article-title\">{}</h1>", meta.title())),
        (EXCERPT, format!("<p class=\"blog-article-excerpt\">{}</p>", meta.excerpt())),
        (CONTENT, format!("<div class=\"blog-article-content\">\n{body_html}")),
    ];

    let html = replacements
        .iter()
        .fold(template.to_string(), |html, (placeholder, replacement)| {
            replace_placeholder(html, placeholder, replacement)
        });

    if !SAMPLE_SECTIONS.is_match(&html) {
        debug!("No sample sections found in template. nothing to strip");
        return html;
    }
    SAMPLE_SECTIONS.replace_all(&html, "").into_owned()
}
