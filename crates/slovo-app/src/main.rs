use std::fs;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use slovo_config::Config;
use slovo_lookup::LookupClient;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod history;
mod state;
mod ui;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "slovo", version, about = "Console dictionary front end")]
struct Args {
    /// Directory with dictionary files
    #[arg(long)]
    dict_dir: Option<String>,

    /// Directory with sound files
    #[arg(long)]
    sound_dir: Option<String>,

    /// Audio player command
    #[arg(long)]
    player: Option<String>,

    /// Extra arguments passed to the lookup tool
    #[arg(long)]
    lookup_args: Option<String>,

    /// How many looked-up phrases to remember
    #[arg(long)]
    history_size: Option<usize>,

    /// Disable autocompletion
    #[arg(long)]
    no_auto: bool,

    /// Word or phrase to look up on startup
    words: Vec<String>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.dict_dir {
            config.dictionary.root = dir.clone();
        }
        if let Some(dir) = &self.sound_dir {
            config.sound.root = dir.clone();
        }
        if let Some(player) = &self.player {
            config.sound.player = player.clone();
        }
        if let Some(args) = &self.lookup_args {
            config.lookup.args = args.clone();
        }
        if let Some(size) = self.history_size {
            config.ui.history_size = size;
        }
        if self.no_auto {
            config.dictionary.autocomplete = false;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    args.apply(&mut config);

    // The cache location is required; nothing works without it.
    fs::create_dir_all(&config.cache_dir).with_context(|| {
        format!(
            "cache storage unavailable at {}",
            config.cache_dir.display()
        )
    })?;

    let lookup = LookupClient::new(&config.lookup.program, config.lookup.argv());
    lookup.ensure_available()?;

    let initial = (!args.words.is_empty()).then(|| args.words.join(" "));

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(lookup, initial);

    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("shutdown requested");
            controller.shutdown();
            while tasks.join_next().await.is_some() {}
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished, shutting down"),
                Some(Ok(Err(e))) => {
                    controller.shutdown();
                    return Err(e);
                }
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
            while tasks.join_next().await.is_some() {}
        }
    }
    Ok(())
}
