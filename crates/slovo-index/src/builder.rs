use std::collections::HashSet;
use std::path::Path;

use crate::error::IndexError;
use crate::fingerprint;
use crate::source::{HeadwordProvider, SourceId};
use crate::store;

/// Merge every source's headwords into one deduplicated,
/// case-insensitively sorted word list.
///
/// Sources are visited in sorted order so the tie-break between entries
/// equal under case folding (first-encounter order) is deterministic.
/// Any unreadable source fails the whole build; there is no
/// partial-success path.
pub fn build(
    sources: &[SourceId],
    provider: &dyn HeadwordProvider,
) -> Result<Vec<String>, IndexError> {
    let mut ordered = sources.to_vec();
    ordered.sort();

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for source in &ordered {
        let headwords = provider.list_headwords(source)?;
        tracing::debug!(source = %source, count = headwords.len(), "collected headwords");
        for word in headwords {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }

    words.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    tracing::info!(words = words.len(), sources = ordered.len(), "word index built");
    Ok(words)
}

/// Build, persist the store and refresh the fingerprint. Nothing is
/// written unless every source was readable.
pub fn rebuild(
    sources: &[SourceId],
    provider: &dyn HeadwordProvider,
    store_path: &Path,
    fingerprint_path: &Path,
) -> Result<Vec<String>, IndexError> {
    let words = build(sources, provider)?;
    store::save(store_path, &words)?;

    let identifiers: Vec<String> = sources.iter().map(SourceId::metadata_name).collect();
    fingerprint::refresh(fingerprint_path, &fingerprint::compute(&identifiers))?;
    Ok(words)
}
