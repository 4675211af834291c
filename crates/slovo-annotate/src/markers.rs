use std::fmt::Write;

use crate::document::AnnotatedDocument;

/// Splice region markers into the document text for the rendering layer:
/// a start marker carrying the label, an end marker with no payload.
/// Everything between regions passes through verbatim, embedded style
/// markers included. Regions must be ordered and non-overlapping, which
/// both annotation passes guarantee.
pub fn render(doc: &AnnotatedDocument) -> String {
    let mut out = String::with_capacity(doc.text.len() + doc.regions.len() * 10);
    let mut pos = 0;

    for region in &doc.regions {
        debug_assert!(region.span.start >= pos);
        out.push_str(&doc.text[pos..region.span.start]);
        let _ = write!(out, "[\"{}\"]", region.label);
        out.push_str(&doc.text[region.span.clone()]);
        out.push_str("[\"\"]");
        pos = region.span.end;
    }
    out.push_str(&doc.text[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use crate::search::annotate_search;
    use crate::sections::annotate_sections;

    use super::*;

    #[test]
    fn wraps_each_span_with_labeled_markers() {
        let doc = annotate_search("cat and CAT", "cat", 0);
        assert_eq!(render(&doc), "[\"0\"]cat[\"\"] and [\"1\"]CAT[\"\"]");
    }

    #[test]
    fn section_markers_carry_their_label() {
        let doc = annotate_sections("-->Dict\n-->word\nbody\n");
        assert_eq!(render(&doc), "[\"0\"]-->[\"\"]Dict\n-->word\nbody\n");
    }

    #[test]
    fn adjacent_regions_render_back_to_back() {
        let doc = annotate_search("aaaa", "aa", 0);
        assert_eq!(render(&doc), "[\"0\"]aa[\"\"][\"1\"]aa[\"\"]");
    }

    #[test]
    fn no_regions_round_trips_the_text() {
        let doc = annotate_search("plain", "missing", 0);
        assert_eq!(render(&doc), "plain");
    }
}
