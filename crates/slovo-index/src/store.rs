use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::IndexError;

/// One word per line, UTF-8, case preserved, sorted case-insensitively.

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn load(path: &Path) -> Result<Vec<String>, IndexError> {
    let raw = fs::read_to_string(path).map_err(|e| IndexError::storage(path, e))?;
    Ok(raw
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Replace the store atomically; a concurrent reader never observes a
/// half-written index.
pub fn save(path: &Path, words: &[String]) -> Result<(), IndexError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(dir).map_err(|e| IndexError::storage(path, e))?;
    {
        let mut w = BufWriter::new(tmp.as_file());
        for word in words {
            writeln!(w, "{word}").map_err(|e| IndexError::storage(path, e))?;
        }
        w.flush().map_err(|e| IndexError::storage(path, e))?;
    }
    tmp.persist(path)
        .map_err(|e| IndexError::storage(path, e.error))?;
    Ok(())
}
