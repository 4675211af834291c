use std::env;

use serde::{Deserialize, Serialize};

fn default_program() -> String {
    "sdcv".to_string()
}

fn default_args() -> String {
    "-c -n".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Console lookup tool invoked per query.
    #[serde(default = "default_program")]
    pub program: String,
    /// Extra arguments passed before the query, split on whitespace.
    #[serde(default = "default_args")]
    pub args: String,
}

impl LookupConfig {
    pub fn new() -> Self {
        let program = env::var("SLOVO_LOOKUP_PROGRAM").unwrap_or_else(|_| default_program());
        let args = env::var("SLOVO_LOOKUP_ARGS").unwrap_or_else(|_| default_args());

        Self { program, args }
    }

    pub fn argv(&self) -> Vec<String> {
        self.args.split_whitespace().map(str::to_string).collect()
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}
