//! A small Markdown subset rendered by ordered textual rewrites.
//!
//! Rule order matters: headings are matched most specific first, code is
//! lifted out before inline markup and emphasis runs last so it also applies
//! inside already wrapped blocks. Source text is never HTML escaped.

use std::sync::LazyLock;

use maud::{html, PreEscaped};
use regex::{Captures, Regex};

static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
// the newline right before the closing fence belongs to the fence
static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)\n?```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());
static LIST_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^<li>.*</li>(?:\n<li>.*</li>)*$").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Tags that already form a block and are not wrapped in `<p>`.
const BLOCK_TAGS: [&str; 6] = ["<h1", "<h2", "<h3", "<ul", "<pre", "<blockquote"];

fn render_code_block(caps: &Captures) -> String {
    let lang = &caps[1];
    let code = &caps[2];
    html! {
        pre { code class={ "language-" (lang) } { (PreEscaped(code)) } }
    }
    .into_string()
}

fn wrap_lists(text: &str) -> String {
    let text = LIST_ITEM.replace_all(text, "<li>${1}</li>");
    let text = LIST_RUN.replace_all(&text, "<ul>${0}</ul>");
    text.replace("</li>\n<li>", "</li><li>")
        .replace("</ul>\n<ul>", "")
}

fn wrap_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|block| {
            let block = block.trim();
            if block.is_empty() || BLOCK_TAGS.iter().any(|tag| block.starts_with(tag)) {
                block.to_string()
            } else {
                format!("<p>{block}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Converts an article body into an HTML fragment.
pub(crate) fn markdown_to_html(markdown: &str) -> String {
    let html = H3.replace_all(markdown, "<h3>${1}</h3>");
    let html = H2.replace_all(&html, "<h2>${1}</h2>");
    let html = H1.replace_all(&html, "<h1>${1}</h1>");

    let html = CODE_BLOCK.replace_all(&html, render_code_block);
    let html = INLINE_CODE.replace_all(&html, "<code>${1}</code>");

    let html = wrap_lists(&html);
    let html = wrap_paragraphs(&html);

    BOLD.replace_all(&html, "<strong>${1}</strong>").into_owned()
}
