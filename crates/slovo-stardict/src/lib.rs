use std::fs;
use std::path::PathBuf;

use slovo_index::{HeadwordProvider, SourceError, SourceId};

pub mod idx;

const METADATA_SUFFIX: &str = ".ifo";

/// The installed dictionary shelf under one root directory.
pub struct StardictShelf {
    root: PathBuf,
}

impl StardictShelf {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Enumerate installed sources by their metadata files. Sorted, so
    /// callers never depend on directory listing order.
    pub fn list_installed(&self) -> Result<Vec<SourceId>, SourceError> {
        let entries = fs::read_dir(&self.root).map_err(|e| SourceError::Unreadable {
            source: self.root.display().to_string(),
            cause: e,
        })?;

        let mut sources = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::Unreadable {
                source: self.root.display().to_string(),
                cause: e,
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(stem) = name.strip_suffix(METADATA_SUFFIX) {
                sources.push(SourceId::new(stem));
            }
        }
        sources.sort();
        Ok(sources)
    }
}

impl HeadwordProvider for StardictShelf {
    fn list_headwords(&self, source: &SourceId) -> Result<Vec<String>, SourceError> {
        let unreadable = |cause| SourceError::Unreadable {
            source: source.to_string(),
            cause,
        };

        let ifo_path = self.root.join(source.metadata_name());
        let ifo = fs::read_to_string(&ifo_path).map_err(unreadable)?;
        let summary = idx::parse_ifo(&ifo).map_err(|detail| SourceError::Corrupt {
            source_id: source.to_string(),
            detail,
        })?;

        let idx_path = self.root.join(format!("{}.idx", source.stem()));
        let bytes = fs::read(&idx_path).map_err(unreadable)?;
        let words = idx::decode(&bytes).map_err(|detail| SourceError::Corrupt {
            source_id: source.to_string(),
            detail,
        })?;

        if let Some(declared) = summary.word_count {
            if declared != words.len() {
                tracing::warn!(
                    source = %source,
                    declared,
                    decoded = words.len(),
                    "metadata word count disagrees with index"
                );
            }
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write_source(dir: &Path, stem: &str, words: &[&str]) {
        let ifo = format!(
            "StarDict's dict ifo file\nversion=2.4.2\nbookname={stem}\nwordcount={}\n",
            words.len()
        );
        fs::write(dir.join(format!("{stem}.ifo")), ifo).unwrap();

        let mut bytes = Vec::new();
        for word in words {
            bytes.extend_from_slice(word.as_bytes());
            bytes.push(0);
            bytes.extend_from_slice(&[0; 8]);
        }
        fs::write(dir.join(format!("{stem}.idx")), bytes).unwrap();
    }

    #[test]
    fn lists_metadata_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path(), "ru-en", &["собака"]);
        write_source(dir.path(), "en-ru", &["dog"]);
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let shelf = StardictShelf::new(dir.path());
        let sources = shelf.list_installed().unwrap();
        let stems: Vec<&str> = sources.iter().map(SourceId::stem).collect();
        assert_eq!(stems, vec!["en-ru", "ru-en"]);
    }

    #[test]
    fn reads_headwords_from_the_index_file() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path(), "en-ru", &["apple", "pear"]);

        let shelf = StardictShelf::new(dir.path());
        let words = shelf.list_headwords(&SourceId::new("en-ru")).unwrap();
        assert_eq!(words, vec!["apple", "pear"]);
    }

    #[test]
    fn missing_metadata_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let shelf = StardictShelf::new(dir.path());
        let err = shelf.list_headwords(&SourceId::new("gone")).unwrap_err();
        assert!(matches!(err, SourceError::Unreadable { .. }));
    }

    #[test]
    fn corrupt_index_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path(), "en-ru", &["apple"]);
        fs::write(dir.path().join("en-ru.idx"), b"apple").unwrap();

        let shelf = StardictShelf::new(dir.path());
        let err = shelf.list_headwords(&SourceId::new("en-ru")).unwrap_err();
        assert!(matches!(err, SourceError::Corrupt { .. }));
    }
}
