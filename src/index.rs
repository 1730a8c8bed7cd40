use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use log::info;

use crate::generator::data::IndexEntry;

/// Writes the article index as an indented JSON array, replacing any previous index.
pub(crate) fn save_index(index_path: &Path, entries: &[IndexEntry]) -> anyhow::Result<()> {
    let index_fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(index_path)
        .with_context(|| format!("while opening {index_path:?}"))?;
    let mut writer = BufWriter::new(index_fd);
    serde_json::to_writer_pretty(&mut writer, entries)
        .with_context(|| format!("while writing {index_path:?}"))?;
    writer.flush()?;

    info!("Updated {index_path:?} ({} articles)", entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::parse_frontmatter;

    #[test]
    fn writes_indented_json_without_escaping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let (meta, _) = parse_frontmatter("---\ntitle: 日記\ndate: 2024-12-01\n---\n");
        save_index(&path, &[IndexEntry::new("diary", &meta)]).unwrap();

        let expected = concat!(
            "[\n",
            "  {\n",
            "    \"id\": \"diary\",\n",
            "    \"title\": \"日記\",\n",
            "    \"date\": \"2024-12-01\",\n",
            "    \"category\": \"\",\n",
            "    \"excerpt\": \"\",\n",
            "    \"file\": \"diary.html\"\n",
            "  }\n",
            "]",
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn overwrites_longer_previous_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        save_index(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
