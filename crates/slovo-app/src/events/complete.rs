use kanal::AsyncSender;
use slovo_types::AppEvent;

use super::Session;

pub async fn handle_complete(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    prefix: String,
) -> anyhow::Result<()> {
    let Some(engine) = session.engine.as_mut() else {
        return Ok(());
    };

    let completion = engine.complete(&prefix);
    app_to_ui_tx
        .send(AppEvent::ShowCompletions {
            prefix,
            entries: completion.entries,
            exhausted: completion.exhausted,
        })
        .await?;
    Ok(())
}
