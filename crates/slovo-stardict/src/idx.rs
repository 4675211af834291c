//! Decoding for the shelf's index-file layout: each entry is a
//! NUL-terminated UTF-8 headword followed by two big-endian u32s
//! (offset and size into the payload file). Only the headwords are
//! consumed here; payloads stay the lookup tool's business.

/// Trailing offset + size pair per entry.
const ENTRY_TAIL: usize = 8;

const IFO_MAGIC: &str = "StarDict's dict ifo file";

pub struct IfoSummary {
    pub word_count: Option<usize>,
}

/// Light validation of the metadata file: magic header plus the declared
/// word count, when present.
pub fn parse_ifo(raw: &str) -> Result<IfoSummary, String> {
    let mut lines = raw.lines();
    match lines.next() {
        Some(first) if first.trim_end() == IFO_MAGIC => {}
        _ => return Err("missing metadata magic header".to_string()),
    }

    let mut word_count = None;
    for line in lines {
        if let Some(value) = line.strip_prefix("wordcount=") {
            word_count = value.trim().parse().ok();
        }
    }
    Ok(IfoSummary { word_count })
}

pub fn decode(bytes: &[u8]) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let nul = bytes[pos..]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| format!("unterminated entry at byte {pos}"))?;
        let word = std::str::from_utf8(&bytes[pos..pos + nul])
            .map_err(|e| format!("entry at byte {pos} is not UTF-8: {e}"))?;
        words.push(word.to_string());

        pos += nul + 1;
        if bytes.len() - pos < ENTRY_TAIL {
            return Err(format!("truncated entry tail at byte {pos}"));
        }
        pos += ENTRY_TAIL;
    }
    Ok(words)
}
