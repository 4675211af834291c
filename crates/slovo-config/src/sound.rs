use std::env;

use serde::{Deserialize, Serialize};

fn default_root() -> String {
    "/usr/share/stardict/sounds".to_string()
}

fn default_player() -> String {
    "mpv".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SoundConfig {
    /// Sound base root; one subdirectory per pronunciation set.
    #[serde(default = "default_root")]
    pub root: String,
    /// Player command line, split on whitespace before spawning.
    #[serde(default = "default_player")]
    pub player: String,
}

impl SoundConfig {
    pub fn new() -> Self {
        let root = env::var("SLOVO_SOUND_DIR").unwrap_or_else(|_| default_root());
        let player = env::var("SLOVO_PLAYER").unwrap_or_else(|_| default_player());

        Self { root, player }
    }

    pub fn player_argv(&self) -> Vec<String> {
        self.player.split_whitespace().map(str::to_string).collect()
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            player: default_player(),
        }
    }
}
