use std::{collections::HashMap, sync::LazyLock};

use regex::{Regex, RegexBuilder};

// `---` line, header block, `---` line, then everything else as the body.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\A---\s*\n(.*?)\n---\s*\n(.*)\z")
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});

/// Key/value pairs from an article's frontmatter block.
///
/// Every value is kept as a plain string. Lookups of absent keys yield `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    fields: HashMap<String, String>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn title(&self) -> &str {
        self.get("title")
    }

    pub fn date(&self) -> &str {
        self.get("date")
    }

    pub fn category(&self) -> &str {
        self.get("category")
    }

    pub fn excerpt(&self) -> &str {
        self.get("excerpt")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Splits `content` into its frontmatter and the remaining body.
///
/// Content that does not open with a `---` delimited block is all body,
/// with empty metadata.
pub(crate) fn parse_frontmatter(content: &str) -> (Metadata, &str) {
    let Some(caps) = HEADER_PATTERN.captures(content) else {
        return (Metadata::default(), content);
    };

    let mut metadata = Metadata::default();
    for line in caps[1].split('\n') {
        // only the first colon separates; values such as times keep theirs
        if let Some((name, value)) = line.split_once(':') {
            metadata.insert(name.trim(), value.trim());
        }
    }

    let body = caps.get(2).map_or("", |m| m.as_str());
    (metadata, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_body() {
        let content = "---\ntitle: Hello\ndate: 2024-12-01\ncategory: Rust\n---\n# Body\n\ntext\n";
        let (meta, body) = parse_frontmatter(content);

        assert_eq!(meta.title(), "Hello");
        assert_eq!(meta.date(), "2024-12-01");
        assert_eq!(meta.category(), "Rust");
        assert_eq!(meta.len(), 3);
        assert_eq!(body, "# Body\n\ntext\n");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let (meta, _) = parse_frontmatter("---\ntitle: Meeting: 10:30\n---\nbody");
        assert_eq!(meta.title(), "Meeting: 10:30");
    }

    #[test]
    fn trims_keys_and_values() {
        let (meta, _) = parse_frontmatter("---\n  excerpt  :   short text  \n---\n");
        assert_eq!(meta.excerpt(), "short text");
    }

    #[test]
    fn ignores_lines_without_colon() {
        let (meta, body) = parse_frontmatter("---\njust words\ntitle: T\n---\nbody");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.title(), "T");
        assert_eq!(body, "body");
    }

    #[test]
    fn last_duplicate_key_wins() {
        let (meta, _) = parse_frontmatter("---\ntitle: first\ntitle: second\n---\n");
        assert_eq!(meta.title(), "second");
    }

    #[test]
    fn keeps_unrecognized_keys() {
        let (meta, _) = parse_frontmatter("---\nauthor: someone\n---\n");
        assert_eq!(meta.get("author"), "someone");
        assert_eq!(meta.title(), "");
    }

    #[test]
    fn closes_at_first_delimiter() {
        let content = "---\ntitle: T\n---\nintro\n---\nmore\n";
        let (meta, body) = parse_frontmatter(content);
        assert_eq!(meta.title(), "T");
        assert_eq!(body, "intro\n---\nmore\n");
    }

    #[test]
    fn tolerates_trailing_whitespace_on_delimiters() {
        let (meta, body) = parse_frontmatter("---  \ntitle: T\n--- \nbody");
        assert_eq!(meta.title(), "T");
        assert_eq!(body, "body");
    }

    #[test]
    fn without_header_everything_is_body() {
        let content = "# Plain\n\nno header here\n";
        let (meta, body) = parse_frontmatter(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn header_must_start_the_document() {
        let content = "\n---\ntitle: T\n---\nbody";
        let (meta, body) = parse_frontmatter(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn unterminated_header_is_body() {
        let content = "---\ntitle: T\nno closing line";
        let (meta, body) = parse_frontmatter(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn empty_header_block_does_not_match() {
        let content = "---\n---\nbody";
        let (meta, body) = parse_frontmatter(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }
}
