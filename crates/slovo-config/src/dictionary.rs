use std::env;

use serde::{Deserialize, Serialize};

fn default_root() -> String {
    "/usr/share/stardict/dic".to_string()
}

fn default_autocomplete() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory scanned for installed dictionary metadata files.
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_autocomplete")]
    pub autocomplete: bool,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let root = env::var("SLOVO_DICT_DIR").unwrap_or_else(|_| default_root());
        let autocomplete = env::var("SLOVO_NOAUTO").map(|v| v != "1").unwrap_or(true);

        Self { root, autocomplete }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            autocomplete: default_autocomplete(),
        }
    }
}
