use std::env;

use serde::{Deserialize, Serialize};

fn default_history_size() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        let history_size = env::var("SLOVO_HISTORY_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_history_size);

        Self { history_size }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
        }
    }
}
