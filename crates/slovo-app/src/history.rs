use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Bounded, insertion-ordered list of looked-up phrases. Re-looking-up
/// a phrase moves it to the back; exceeding the cap evicts the oldest.
pub struct History {
    entries: Vec<String>,
    cap: usize,
}

impl History {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Missing file means an empty history, not an error.
    pub fn load(path: &Path, cap: usize) -> Self {
        let mut history = Self::new(cap);
        if let Ok(raw) = fs::read_to_string(path) {
            for line in raw.lines().filter(|l| !l.is_empty()) {
                history.push(line);
            }
        }
        history
    }

    pub fn push(&mut self, phrase: &str) {
        if self.cap == 0 || phrase.is_empty() {
            return;
        }
        self.entries.retain(|e| e != phrase);
        self.entries.push(phrase.to_string());
        if self.entries.len() > self.cap {
            let excess = self.entries.len() - self.cap;
            self.entries.drain(..excess);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("cannot write history near {}", path.display()))?;
        {
            let mut w = BufWriter::new(tmp.as_file());
            for entry in &self.entries {
                writeln!(w, "{entry}")?;
            }
            w.flush()?;
        }
        tmp.persist(path)
            .with_context(|| format!("cannot replace history at {}", path.display()))?;
        Ok(())
    }
}
