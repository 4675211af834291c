use std::path::PathBuf;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use slovo_annotate::{AnnotatedDocument, Cursor};
use slovo_index::CompletionEngine;
use slovo_io::SoundShelf;
use slovo_lookup::LookupClient;
use slovo_stardict::StardictShelf;
use slovo_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::history::History;
use crate::state::AppState;

pub mod complete;
pub mod lookup;
pub mod navigate;
pub mod search;

/// Session state owned by the event loop. The loop handles one event at
/// a time, so every operation on this struct runs to completion before
/// the next one starts; there is no other writer.
pub struct Session {
    pub history: History,
    pub engine: Option<CompletionEngine>,
    pub last_word: String,
    /// Un-annotated output of the last successful lookup.
    pub raw_text: String,
    pub sections: AnnotatedDocument,
    pub search: Option<AnnotatedDocument>,
    pub section_cursor: Cursor,
    pub hit_cursor: Cursor,
    pub sound_path: Option<PathBuf>,
}

impl Session {
    fn new(history: History, engine: Option<CompletionEngine>) -> Self {
        Self {
            history,
            engine,
            last_word: String::new(),
            raw_text: String::new(),
            sections: AnnotatedDocument::default(),
            search: None,
            section_cursor: Cursor::new(),
            hit_cursor: Cursor::new(),
            sound_path: None,
        }
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    lookup_client: LookupClient,
    initial: Option<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let config = state.config.read().await;
    let dict_root = config.dictionary.root.clone();
    let sound_root = config.sound.root.clone();
    let autocomplete = config.dictionary.autocomplete;
    let history_size = config.ui.history_size;
    let store_path = config.word_index_path();
    let fingerprint_path = config.fingerprint_path();
    let history_path = config.history_path();
    drop(config);

    let shelf = StardictShelf::new(&dict_root);
    let engine = if autocomplete {
        let sources = shelf.list_installed()?;
        tracing::info!(sources = sources.len(), "preparing word index");
        Some(CompletionEngine::load_or_build(
            &sources,
            &shelf,
            &store_path,
            &fingerprint_path,
        )?)
    } else {
        tracing::info!("autocompletion disabled");
        None
    };
    let sounds = SoundShelf::scan(&sound_root);
    let mut session = Session::new(History::load(&history_path, history_size), engine);

    if let Some(phrase) = initial {
        lookup::handle_lookup(&mut session, &lookup_client, &sounds, &app_to_ui_tx, phrase)
            .await?;
    }

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                // UI side closed its channel
                Err(_) => break,
            },
        };

        let AppEvent::UiEvent(event) = event else {
            tracing::warn!("unexpected event on the app channel");
            continue;
        };
        match event {
            UiEvent::Lookup(phrase) | UiEvent::PickHistory(phrase) => {
                lookup::handle_lookup(&mut session, &lookup_client, &sounds, &app_to_ui_tx, phrase)
                    .await?;
            }
            UiEvent::Complete(prefix) => {
                complete::handle_complete(&mut session, &app_to_ui_tx, prefix).await?;
            }
            UiEvent::Search(query) => {
                search::handle_search(&mut session, &app_to_ui_tx, query).await?;
            }
            UiEvent::NextHit => navigate::next_hit(&mut session, &app_to_ui_tx).await?,
            UiEvent::NextSection => navigate::next_section(&mut session, &app_to_ui_tx).await?,
            UiEvent::PickSection(index) => {
                navigate::pick_section(&mut session, &app_to_ui_tx, index).await?;
            }
            UiEvent::History => {
                app_to_ui_tx
                    .send(AppEvent::ShowHistory(session.history.entries().to_vec()))
                    .await?;
            }
            UiEvent::PlaySound => {
                if let Some(path) = session.sound_path.clone() {
                    let player = state.config.read().await.sound.player_argv();
                    if let Err(e) = slovo_io::sound::play(&player, &path).await {
                        tracing::warn!("playback failed: {e}");
                        app_to_ui_tx
                            .send(AppEvent::ReportError(e.to_string()))
                            .await?;
                    }
                }
            }
            UiEvent::Quit => break,
        }
    }

    if let Err(e) = session.history.save(&history_path) {
        tracing::warn!("failed to save history: {e}");
    }
    let _ = app_to_ui_tx.send(AppEvent::Shutdown).await;
    Ok(())
}
