use crate::document::{AnnotatedDocument, Region};

/// Find every case-insensitive occurrence of `query` in `raw`.
///
/// Both sides are case-folded for matching; spans and payloads report
/// the original casing. Labels start at `first_label` so regions
/// appended after a section pass keep a single running sequence, or at
/// 0 on a freshly rebuilt document. An empty query yields no regions.
pub fn annotate_search(raw: &str, query: &str, first_label: usize) -> AnnotatedDocument {
    let mut regions = Vec::new();

    if !query.is_empty() {
        let needle = query.to_lowercase();
        let (folded, offsets) = fold_with_offsets(raw);

        let mut from = 0;
        while let Some(found) = folded[from..].find(&needle) {
            let fold_start = from + found;
            let fold_end = fold_start + needle.len();

            let start = offsets[fold_start];
            let last_char_start = offsets[fold_end - 1];
            let end = last_char_start + char_len_at(raw, last_char_start);

            regions.push(Region {
                label: first_label + regions.len(),
                span: start..end,
                payload: raw[start..end].to_string(),
            });
            from = fold_end;
        }
    }

    AnnotatedDocument {
        text: raw.to_string(),
        regions,
    }
}

/// Case-fold `s`, recording for every folded byte the byte offset of the
/// original character that produced it. Folding can change byte lengths,
/// so match positions cannot be mapped back arithmetically.
fn fold_with_offsets(s: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(s.len());
    let mut offsets = Vec::with_capacity(s.len());
    for (i, ch) in s.char_indices() {
        for low in ch.to_lowercase() {
            for _ in 0..low.len_utf8() {
                offsets.push(i);
            }
            folded.push(low);
        }
    }
    (folded, offsets)
}

fn char_len_at(s: &str, at: usize) -> usize {
    s[at..].chars().next().map(char::len_utf8).unwrap_or(0)
}
