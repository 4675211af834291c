use std::fmt;

/// Installed dictionary source, identified by the stem of its metadata
/// file (`<stem>.ifo`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId {
    stem: String,
}

impl SourceId {
    pub fn new(stem: impl Into<String>) -> Self {
        Self { stem: stem.into() }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Metadata file name; this is the identifier fed to the fingerprint.
    pub fn metadata_name(&self) -> String {
        format!("{}.ifo", self.stem)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stem)
    }
}

/// Headword access over installed dictionary sources
pub trait HeadwordProvider {
    /// List every headword of one source. Any failure aborts the
    /// surrounding index build.
    fn list_headwords(&self, source: &SourceId) -> Result<Vec<String>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source `{source}` is unreadable")]
    Unreadable {
        source: String,
        #[source]
        cause: std::io::Error,
    },

    #[error("source `{source_id}` is corrupt: {detail}")]
    Corrupt { source_id: String, detail: String },
}
