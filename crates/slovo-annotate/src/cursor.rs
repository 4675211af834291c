/// Position of the highlighted region within a document's region list.
/// Owned by the session, not the annotator; a fresh annotation resets it
/// so the first advance lands on region 0. No wraparound: advancing past
/// the last region clamps there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    current: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move to the next region and return its index, or `None` when the
    /// document has no regions.
    pub fn advance(&mut self, region_count: usize) -> Option<usize> {
        if region_count == 0 {
            self.current = None;
            return None;
        }
        let next = match self.current {
            None => 0,
            Some(i) => (i + 1).min(region_count - 1),
        };
        self.current = Some(next);
        Some(next)
    }

    /// Jump straight to a picked region.
    pub fn set(&mut self, index: usize) {
        self.current = Some(index);
    }
}
