use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::lookup::LookupConfig;
use self::sound::SoundConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod lookup;
pub mod sound;
pub mod ui;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub sound: SoundConfig,
    pub lookup: LookupConfig,
    pub ui: UiConfig,

    /// Directory holding the fingerprint, word-index and history files.
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        let cache_dir = env::var("SLOVO_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_cache_dir());

        Config {
            dictionary: DictionaryConfig::new(),
            sound: SoundConfig::new(),
            lookup: LookupConfig::new(),
            ui: UiConfig::new(),

            cache_dir,
        }
    }

    pub fn fingerprint_path(&self) -> PathBuf {
        self.cache_dir.join("dicts")
    }

    pub fn word_index_path(&self) -> PathBuf {
        self.cache_dir.join("words")
    }

    pub fn history_path(&self) -> PathBuf {
        self.cache_dir.join("history")
    }
}

fn default_cache_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("slovo")
}
