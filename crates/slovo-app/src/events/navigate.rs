use kanal::AsyncSender;
use slovo_types::AppEvent;

use super::Session;

/// Jump to the next search hit, staying clamped on the last one.
pub async fn next_hit(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(hits) = &session.search else {
        return Ok(());
    };
    if let Some(index) = session.hit_cursor.advance(hits.region_count()) {
        let label = hits.regions[index].label;
        app_to_ui_tx.send(AppEvent::HighlightRegion(label)).await?;
    }
    Ok(())
}

/// Jump to the next dictionary section of the current lookup.
pub async fn next_section(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let count = session.sections.region_count();
    if let Some(index) = session.section_cursor.advance(count) {
        let label = session.sections.regions[index].label;
        app_to_ui_tx.send(AppEvent::HighlightRegion(label)).await?;
    }
    Ok(())
}

/// Jump straight to a section picked from the dictionary list.
pub async fn pick_section(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    index: usize,
) -> anyhow::Result<()> {
    if index >= session.sections.region_count() {
        return Ok(());
    }
    session.section_cursor.set(index);
    let label = session.sections.regions[index].label;
    app_to_ui_tx.send(AppEvent::HighlightRegion(label)).await?;
    Ok(())
}
