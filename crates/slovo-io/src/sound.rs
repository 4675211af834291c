use std::fs;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;

const EXTENSIONS: &[&str] = &["mp3", "ogg", "wav"];

/// The installed pronunciation base: a root directory with one
/// subdirectory per sound set, each keyed by the word's first character.
pub struct SoundShelf {
    root: PathBuf,
    subdirs: Vec<String>,
}

impl SoundShelf {
    /// Collect the sound subdirectories once at startup. A missing or
    /// unreadable root leaves an empty shelf; pronunciation is optional.
    pub fn scan(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut subdirs = Vec::new();
        match fs::read_dir(&root) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    if entry.path().is_dir() {
                        if let Some(name) = entry.file_name().to_str() {
                            subdirs.push(name.to_string());
                        }
                    }
                }
                subdirs.sort();
            }
            Err(e) => {
                tracing::warn!(root = %root.display(), "sound base unavailable: {e}");
            }
        }
        Self { root, subdirs }
    }

    pub fn is_empty(&self) -> bool {
        self.subdirs.is_empty()
    }

    /// Look for `<subdir>/<first-char>/<word>.{mp3,ogg,wav}`.
    pub fn probe(&self, word: &str) -> Option<PathBuf> {
        let word = word.trim().to_lowercase();
        let first = word.chars().next()?;

        for subdir in &self.subdirs {
            let base = self.root.join(subdir).join(first.to_string());
            for ext in EXTENSIONS {
                let candidate = base.join(format!("{word}.{ext}"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

/// Spawn the player detached; playback failures never affect lookup
/// state.
pub async fn play(player_argv: &[String], path: &Path) -> Result<()> {
    let Some((program, args)) = player_argv.split_first() else {
        bail!("empty player command");
    };
    Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to start player `{program}`"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sound_file(root: &Path, subdir: &str, word: &str, ext: &str) -> PathBuf {
        let dir = root
            .join(subdir)
            .join(word.chars().next().unwrap().to_string());
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{word}.{ext}"));
        fs::write(&path, b"audio").unwrap();
        path
    }

    #[test]
    fn probes_by_first_character_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        let expected = make_sound_file(dir.path(), "enUS", "apple", "ogg");

        let shelf = SoundShelf::scan(dir.path());
        assert_eq!(shelf.probe("apple"), Some(expected));
        assert_eq!(shelf.probe("  Apple \n"), shelf.probe("apple"));
        assert_eq!(shelf.probe("pear"), None);
    }

    #[test]
    fn missing_root_gives_an_empty_shelf() {
        let shelf = SoundShelf::scan("/nonexistent/sound/base");
        assert!(shelf.is_empty());
        assert_eq!(shelf.probe("apple"), None);
    }

    #[test]
    fn empty_word_probes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let shelf = SoundShelf::scan(dir.path());
        assert_eq!(shelf.probe("   "), None);
    }

    #[tokio::test]
    async fn empty_player_command_is_rejected() {
        let err = play(&[], Path::new("x.mp3")).await.unwrap_err();
        assert!(err.to_string().contains("empty player"));
    }
}
