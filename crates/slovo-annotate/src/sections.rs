use crate::document::{AnnotatedDocument, Region};

/// Separator the lookup tool prints between dictionary sections.
pub const SECTION_MARKER: &str = "-->";

/// Styling sequences the lookup tool wraps section names in.
const STYLE_STRIP: &[&str] = &["\u{1b}[0;34m", "\u{1b}[0m"];

/// Marker lines come in open/close pairs; only the opening line of each
/// pair starts a navigable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    ExpectingOpen,
    ExpectingClose,
}

/// Scan a lookup result for dictionary sections.
///
/// Every line containing [`SECTION_MARKER`] flips the pairing state;
/// opening lines become regions labeled from 0 in reading order, with
/// the dictionary name (text after the marker, styling stripped) as
/// payload. All other lines pass through untouched, including their own
/// embedded style markers.
pub fn annotate_sections(raw: &str) -> AnnotatedDocument {
    let mut regions = Vec::new();
    let mut state = Pairing::ExpectingOpen;
    let mut pos = 0;

    for line in raw.split_inclusive('\n') {
        let body = line.strip_suffix('\n').unwrap_or(line);
        if let Some(at) = body.find(SECTION_MARKER) {
            match state {
                Pairing::ExpectingOpen => {
                    let start = pos + at;
                    let name = strip_styles(&body[at + SECTION_MARKER.len()..]);
                    regions.push(Region {
                        label: regions.len(),
                        span: start..start + SECTION_MARKER.len(),
                        payload: name,
                    });
                    state = Pairing::ExpectingClose;
                }
                Pairing::ExpectingClose => state = Pairing::ExpectingOpen,
            }
        }
        pos += line.len();
    }

    AnnotatedDocument {
        text: raw.to_string(),
        regions,
    }
}

fn strip_styles(name: &str) -> String {
    let mut out = name.to_string();
    for seq in STYLE_STRIP {
        out = out.replace(seq, "");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_opening_markers_become_regions() {
        let raw = "-->\u{1b}[0;34mEn-Ru\u{1b}[0m\n-->apple\nnoun\n-->\u{1b}[0;34mRu-En\u{1b}[0m\n-->apple\n";
        let doc = annotate_sections(raw);

        assert_eq!(doc.payloads(), vec!["En-Ru", "Ru-En"]);
        let labels: Vec<usize> = doc.regions.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![0, 1]);
    }

    #[test]
    fn labels_follow_reading_order() {
        let raw = "-->A\n-->x\n-->B\n-->y\n-->C\n-->z\n";
        let doc = annotate_sections(raw);
        for (i, region) in doc.regions.iter().enumerate() {
            assert_eq!(region.label, i);
        }
        assert_eq!(doc.payloads(), vec!["A", "B", "C"]);
    }

    #[test]
    fn spans_cover_the_marker_token() {
        let doc = annotate_sections("text\n-->Dict\n-->word\n");
        let span = doc.regions[0].span.clone();
        assert_eq!(&doc.text[span], SECTION_MARKER);
    }

    #[test]
    fn plain_text_has_no_regions() {
        let doc = annotate_sections("nothing found\n");
        assert!(doc.regions.is_empty());
        assert_eq!(doc.text, "nothing found\n");
    }
}
