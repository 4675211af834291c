use kanal::AsyncSender;
use slovo_annotate::{annotate_search, render};
use slovo_types::{AppEvent, DisplayDocument};

use super::Session;

/// Re-annotate the current lookup text with search regions. Labels
/// continue after the section regions so the document keeps one running
/// sequence; the hit cursor resets so the next "next hit" lands on the
/// first match.
pub async fn handle_search(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    query: String,
) -> anyhow::Result<()> {
    if query.is_empty() {
        return Ok(());
    }

    let first_label = session.sections.region_count();
    let doc = annotate_search(&session.raw_text, &query, first_label);
    tracing::debug!(query = %query, hits = doc.region_count(), "search annotated");

    session.hit_cursor.reset();

    let display = DisplayDocument {
        text: render(&doc),
        sections: session.sections.payloads(),
        region_count: doc.region_count(),
    };
    session.search = Some(doc);

    app_to_ui_tx.send(AppEvent::ShowDocument(display)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use slovo_annotate::annotate_sections;
    use slovo_index::CompletionEngine;

    use crate::history::History;

    use super::*;

    fn session_with_lookup(raw: &str) -> Session {
        let mut session = Session::new(
            History::new(10),
            Some(CompletionEngine::new(Vec::new())),
        );
        session.raw_text = raw.to_string();
        session.sections = annotate_sections(raw);
        session
    }

    #[tokio::test]
    async fn search_labels_continue_after_sections() {
        let raw = "-->Dict\n-->word\nalpha\nbeta\nALPHA line\n";
        let mut session = session_with_lookup(raw);
        let (tx, rx) = kanal::unbounded_async();

        handle_search(&mut session, &tx, "alpha".to_string())
            .await
            .unwrap();

        match rx.recv().await.unwrap() {
            AppEvent::ShowDocument(doc) => {
                assert_eq!(doc.region_count, 2);
                assert!(doc.text.contains("[\"1\"]alpha[\"\"]"));
                assert!(doc.text.contains("[\"2\"]ALPHA[\"\"]"));
            }
            other => panic!("unexpected event: {other:?}"),
        }

        let hits = session.search.as_ref().unwrap();
        let labels: Vec<usize> = hits.regions.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![1, 2]);
    }

    #[tokio::test]
    async fn empty_query_sends_nothing() {
        let mut session = session_with_lookup("text\n");
        let (tx, rx) = kanal::unbounded_async::<AppEvent>();

        handle_search(&mut session, &tx, String::new()).await.unwrap();
        assert!(rx.try_recv().unwrap().is_none());
    }

    #[tokio::test]
    async fn first_next_hit_after_search_lands_on_the_first_match() {
        let raw = "alpha\nbeta\nALPHA line\n";
        let mut session = session_with_lookup(raw);
        let (tx, rx) = kanal::unbounded_async();

        handle_search(&mut session, &tx, "alpha".to_string())
            .await
            .unwrap();
        let _ = rx.recv().await.unwrap();

        super::super::navigate::next_hit(&mut session, &tx).await.unwrap();
        match rx.recv().await.unwrap() {
            AppEvent::HighlightRegion(label) => assert_eq!(label, 0),
            other => panic!("unexpected event: {other:?}"),
        }
    }

}
