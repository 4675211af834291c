use kanal::{AsyncReceiver, AsyncSender};
use slovo_types::{AppEvent, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

const SOUND_MARK: &str = "\u{1f50a}";

const WELCOME: &str = " Welcome!

 word or phrase    look it up
 /c <prefix>       show completions
 /s <text>         search in the result
 /n                next search hit
 /d                next dictionary section
 /g <n>            go to section n
 /h                show history
 /h <phrase>       look up from history
 /p                pronounce the last word
 /q                quit";

/// Line-oriented bridge standing in for the terminal layout engine: it
/// turns typed commands into [`UiEvent`]s and prints whatever the app
/// loop sends back.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    println!("{WELCOME}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => {
                match event {
                    Ok(AppEvent::Shutdown) | Err(_) => break,
                    Ok(event) => show_event(event),
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    None => {
                        stdin_open = false;
                        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Quit)).await?;
                    }
                    Some(line) => {
                        if let Some(event) = parse_command(&line) {
                            ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn parse_command(line: &str) -> Option<UiEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Some(UiEvent::Lookup(line.to_string()));
    };

    let (cmd, arg) = rest.split_once(' ').unwrap_or((rest, ""));
    let arg = arg.trim();
    match cmd {
        "q" => Some(UiEvent::Quit),
        "n" => Some(UiEvent::NextHit),
        "d" => Some(UiEvent::NextSection),
        "p" => Some(UiEvent::PlaySound),
        "h" if arg.is_empty() => Some(UiEvent::History),
        "h" => Some(UiEvent::PickHistory(arg.to_string())),
        "s" if !arg.is_empty() => Some(UiEvent::Search(arg.to_string())),
        "c" if !arg.is_empty() => Some(UiEvent::Complete(arg.to_string())),
        "g" => arg.parse().ok().map(UiEvent::PickSection),
        _ => None,
    }
}

fn show_event(event: AppEvent) {
    match event {
        AppEvent::ShowDocument(doc) => {
            println!("{}", doc.text);
            if !doc.sections.is_empty() {
                println!("Found in dictionaries: {}", doc.sections.join(", "));
            }
        }
        AppEvent::ShowCompletions {
            prefix,
            entries,
            exhausted,
        } => {
            if entries.is_empty() {
                println!("{prefix}: no completions");
            } else {
                println!("{prefix}: {}", entries.join(" "));
            }
            if exhausted {
                println!("(end of useful completions)");
            }
        }
        AppEvent::HighlightRegion(label) => println!("jump to region {label}"),
        AppEvent::ShowHistory(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                println!("{i}: {entry}");
            }
        }
        AppEvent::SoundStatus { available } => {
            if available {
                println!("{SOUND_MARK} pronunciation available");
            }
        }
        AppEvent::ReportError(message) => println!("error: {message}"),
        AppEvent::UiEvent(_) | AppEvent::Shutdown => {}
    }
}
