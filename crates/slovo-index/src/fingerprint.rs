use std::fs;
use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::IndexError;

/// Digest over the set of installed source identifiers. Detects
/// set-membership changes only, never content changes.
pub type Fingerprint = [u8; 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    Fresh,
    Stale,
}

/// Identifiers are sorted before digesting; directory listing order is
/// filesystem-dependent and must not leak into the result.
pub fn compute(identifiers: &[String]) -> Fingerprint {
    let mut sorted: Vec<&str> = identifiers.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut hasher = Sha256::new();
    for id in sorted {
        hasher.update(id.as_bytes());
        hasher.update([0u8]);
    }
    hasher.finalize().into()
}

/// Compare the stored fingerprint against `current`.
///
/// A missing fingerprint file is the first run: `current` is persisted as
/// the baseline and the index is reported fresh. A dictionary installed
/// before that first run is baked into the baseline without a rebuild.
pub fn check(path: &Path, current: &Fingerprint) -> Result<Staleness, IndexError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no stored fingerprint, saving baseline");
        refresh(path, current)?;
        return Ok(Staleness::Fresh);
    }

    let stored = fs::read(path).map_err(|e| IndexError::storage(path, e))?;
    if stored == current {
        Ok(Staleness::Fresh)
    } else {
        tracing::info!(path = %path.display(), "installed dictionary set changed");
        Ok(Staleness::Stale)
    }
}

/// Atomically replace the stored fingerprint.
pub fn refresh(path: &Path, current: &Fingerprint) -> Result<(), IndexError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| IndexError::storage(path, e))?;
    tmp.write_all(current)
        .and_then(|_| tmp.flush())
        .map_err(|e| IndexError::storage(path, e))?;
    tmp.persist(path)
        .map_err(|e| IndexError::storage(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn order_independent() {
        let a = compute(&ids(&["en-ru.ifo", "ru-en.ifo", "latin.ifo"]));
        let b = compute(&ids(&["latin.ifo", "en-ru.ifo", "ru-en.ifo"]));
        assert_eq!(a, b);
    }

    #[test]
    fn membership_sensitive() {
        let a = compute(&ids(&["en-ru.ifo"]));
        let b = compute(&ids(&["en-ru.ifo", "ru-en.ifo"]));
        assert_ne!(a, b);
    }

    #[test]
    fn first_run_persists_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dicts");
        let current = compute(&ids(&["en-ru.ifo"]));

        assert_eq!(check(&path, &current).unwrap(), Staleness::Fresh);
        assert_eq!(fs::read(&path).unwrap(), current.to_vec());

        // second run with the same set stays fresh
        assert_eq!(check(&path, &current).unwrap(), Staleness::Fresh);
    }

    #[test]
    fn changed_set_reports_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dicts");
        let old = compute(&ids(&["en-ru.ifo"]));
        let new = compute(&ids(&["en-ru.ifo", "ru-en.ifo"]));

        check(&path, &old).unwrap();
        assert_eq!(check(&path, &new).unwrap(), Staleness::Stale);

        refresh(&path, &new).unwrap();
        assert_eq!(check(&path, &new).unwrap(), Staleness::Fresh);
    }
}
