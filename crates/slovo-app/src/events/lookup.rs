use kanal::AsyncSender;
use slovo_annotate::{annotate_sections, render};
use slovo_io::SoundShelf;
use slovo_lookup::LookupClient;
use slovo_types::{AppEvent, DisplayDocument};
use unicode_normalization::UnicodeNormalization;

use super::Session;

pub async fn handle_lookup(
    session: &mut Session,
    client: &LookupClient,
    sounds: &SoundShelf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    phrase: String,
) -> anyhow::Result<()> {
    let phrase = normalize(&phrase);
    if phrase.is_empty() {
        return Ok(());
    }

    let raw = match client.lookup(&phrase).await {
        Ok(raw) => raw,
        Err(e) => {
            // recoverable: report it, keep the prior view
            tracing::warn!("lookup failed: {e}");
            app_to_ui_tx
                .send(AppEvent::ReportError(e.to_string()))
                .await?;
            return Ok(());
        }
    };

    session.history.push(&phrase);
    session.last_word = phrase;
    session.raw_text = raw;
    session.search = None;
    session.section_cursor.reset();
    session.hit_cursor.reset();
    session.sound_path = sounds.probe(&session.last_word);

    let doc = annotate_sections(&session.raw_text);
    tracing::debug!(word = %session.last_word, sections = doc.region_count(), "lookup annotated");

    let display = DisplayDocument {
        text: render(&doc),
        sections: doc.payloads(),
        region_count: doc.region_count(),
    };
    session.sections = doc;

    app_to_ui_tx.send(AppEvent::ShowDocument(display)).await?;
    app_to_ui_tx
        .send(AppEvent::SoundStatus {
            available: session.sound_path.is_some(),
        })
        .await?;
    Ok(())
}

fn normalize(text: &str) -> String {
    let text: String = text.trim().nfkc().collect();
    text.replace(['\n', '\r'], " ").trim().to_string()
}
