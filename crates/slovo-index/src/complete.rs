use std::path::Path;

use crate::builder;
use crate::error::IndexError;
use crate::fingerprint::{self, Staleness};
use crate::source::{HeadwordProvider, SourceId};
use crate::store;

pub const MAX_COMPLETIONS: usize = 25;

/// How many consecutive non-matching entries end the scan once at least
/// one match has been seen. Matches are contiguous in a sorted index;
/// the tolerance only absorbs case quirks at the boundary.
const MISS_TOLERANCE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub entries: Vec<String>,
    /// No useful completions remain for this prefix; the caller flips
    /// the input field's visual state and stops re-querying longer
    /// strings sharing the prefix.
    pub exhausted: bool,
}

impl Completion {
    fn none() -> Self {
        Self {
            entries: Vec::new(),
            exhausted: false,
        }
    }
}

/// In-memory copy of the word index plus the re-query suppression state.
/// The index is read-only for the process lifetime; rebuilds happen only
/// before the engine is constructed.
pub struct CompletionEngine {
    words: Vec<String>,
    dead_prefix: Option<String>,
}

impl CompletionEngine {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            dead_prefix: None,
        }
    }

    /// Load the persisted index, rebuilding it first when the installed
    /// source set changed or the store is missing.
    pub fn load_or_build(
        sources: &[SourceId],
        provider: &dyn HeadwordProvider,
        store_path: &Path,
        fingerprint_path: &Path,
    ) -> Result<Self, IndexError> {
        let identifiers: Vec<String> = sources.iter().map(SourceId::metadata_name).collect();
        let current = fingerprint::compute(&identifiers);
        let staleness = fingerprint::check(fingerprint_path, &current)?;

        let words = if staleness == Staleness::Stale || !store::exists(store_path) {
            tracing::info!("rebuilding word index");
            builder::rebuild(sources, provider, store_path, fingerprint_path)?
        } else {
            store::load(store_path)?
        };
        Ok(Self::new(words))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bounded-scan prefix query.
    ///
    /// Scans the sorted index from the start, collecting case-insensitive
    /// prefix matches up to [`MAX_COMPLETIONS`]; after the first match,
    /// [`MISS_TOLERANCE`] consecutive misses end the scan. When one match
    /// or none is found the prefix is recorded as dead and longer strings
    /// sharing it are answered without scanning until the prefix changes.
    pub fn complete(&mut self, prefix: &str) -> Completion {
        if prefix.is_empty() {
            return Completion::none();
        }

        let folded = prefix.to_lowercase();
        if let Some(dead) = &self.dead_prefix {
            if folded.starts_with(dead.as_str()) {
                return Completion {
                    entries: Vec::new(),
                    exhausted: true,
                };
            }
        }

        let mut entries = Vec::new();
        let mut seen_match = false;
        let mut last_match = 0usize;
        for (n, word) in self.words.iter().enumerate() {
            if entries.len() == MAX_COMPLETIONS {
                break;
            }
            if word.to_lowercase().starts_with(&folded) {
                entries.push(word.clone());
                seen_match = true;
                last_match = n;
            } else if seen_match && n - last_match >= MISS_TOLERANCE {
                break;
            }
        }

        if entries.len() <= 1 {
            self.dead_prefix = Some(folded);
            Completion {
                entries,
                exhausted: true,
            }
        } else {
            self.dead_prefix = None;
            Completion {
                entries,
                exhausted: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(words: &[&str]) -> CompletionEngine {
        CompletionEngine::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn empty_prefix_yields_nothing() {
        let mut e = engine(&["cat", "dog"]);
        assert_eq!(e.complete(""), Completion::none());
    }

    #[test]
    fn matches_keep_index_order() {
        let mut e = engine(&["cat", "car", "care", "dog"]);
        let c = e.complete("ca");
        assert_eq!(c.entries, vec!["cat", "car", "care"]);
        assert!(!c.exhausted);
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let mut e = engine(&["Moscow", "mosque", "moss"]);
        let c = e.complete("MOS");
        assert_eq!(c.entries, vec!["Moscow", "mosque", "moss"]);
        for entry in &c.entries {
            assert!(entry.to_lowercase().starts_with("mos"));
        }
    }

    #[test]
    fn result_count_is_bounded() {
        let words: Vec<String> = (0..100).map(|i| format!("word{i:03}")).collect();
        let mut e = CompletionEngine::new(words);
        let c = e.complete("word");
        assert_eq!(c.entries.len(), MAX_COMPLETIONS);
    }

    #[test]
    fn scan_stops_after_three_consecutive_misses() {
        // sorted order is violated on purpose; the tail match is dropped
        let mut e = engine(&["cab", "cat", "dog", "eel", "fox", "cap"]);
        let c = e.complete("ca");
        assert_eq!(c.entries, vec!["cab", "cat"]);
    }

    #[test]
    fn boundary_misses_within_tolerance_are_absorbed() {
        let mut e = engine(&["cab", "dog", "eel", "cat", "cap"]);
        let c = e.complete("ca");
        assert_eq!(c.entries, vec!["cab", "cat", "cap"]);
    }

    #[test]
    fn single_match_reports_exhausted_and_suppresses_extensions() {
        let mut e = engine(&["unique", "other"]);
        let c = e.complete("uni");
        assert_eq!(c.entries, vec!["unique"]);
        assert!(c.exhausted);

        // longer strings sharing the dead prefix skip the scan
        let c = e.complete("uniq");
        assert!(c.entries.is_empty());
        assert!(c.exhausted);

        // a different prefix queries again
        let c = e.complete("ot");
        assert_eq!(c.entries, vec!["other"]);
        assert!(c.exhausted);
    }

    #[test]
    fn fruitful_prefix_clears_suppression() {
        let mut e = engine(&["car", "care", "cat", "zebra"]);
        assert!(e.complete("zeb").exhausted);
        let c = e.complete("ca");
        assert_eq!(c.entries.len(), 3);
        assert!(!c.exhausted);
    }
}
