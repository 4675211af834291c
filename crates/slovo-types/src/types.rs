use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Freshly annotated lookup result, rendered for the text view.
    ShowDocument(DisplayDocument),
    ShowCompletions {
        prefix: String,
        entries: Vec<String>,
        exhausted: bool,
    },
    /// Scroll the text view to the region carrying this label.
    HighlightRegion(usize),
    ShowHistory(Vec<String>),
    SoundStatus {
        available: bool,
    },
    /// Recoverable failure, shown without touching the current view.
    ReportError(String),
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Lookup(String),
    Complete(String),
    Search(String),
    NextHit,
    NextSection,
    PickSection(usize),
    History,
    PickHistory(String),
    PlaySound,
    Quit,
}

/// Rendered lookup result plus the per-dictionary section names,
/// in region-label order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayDocument {
    pub text: String,
    pub sections: Vec<String>,
    pub region_count: usize,
}
