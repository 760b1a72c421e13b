//! Frame classification and delta extraction.

use serde_json::Value;

/// Literal prefix of a data frame.
const DATA_PREFIX: &str = "data: ";

/// Literal termination sentinel carried in a data frame.
const SENTINEL: &str = "[DONE]";

/// A single classified wire frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireEvent {
    /// Empty or whitespace-only frame.
    Blank,
    /// Protocol keep-alive (`: ...`).
    Comment,
    /// A frame that is neither a comment nor a data frame; not a
    /// recognized wire element, skipped silently.
    Unrecognized,
    /// The `data: [DONE]` termination sentinel.
    Sentinel,
    /// A structured data payload.
    Data(Value),
    /// A data frame whose payload failed to parse. The caller must
    /// push the frame back and stop extracting for this chunk: the
    /// payload may continue in the next transport chunk.
    Malformed,
}

/// Classify one frame.
///
/// Rules are checked in order: blank, comment, non-data, sentinel,
/// payload parse.
#[must_use]
pub fn classify(frame: &str) -> WireEvent {
    if frame.trim().is_empty() {
        return WireEvent::Blank;
    }
    if frame.starts_with(':') {
        return WireEvent::Comment;
    }
    let Some(payload) = frame.strip_prefix(DATA_PREFIX) else {
        return WireEvent::Unrecognized;
    };
    let payload = payload.trim();
    if payload == SENTINEL {
        return WireEvent::Sentinel;
    }
    match serde_json::from_str(payload) {
        Ok(value) => WireEvent::Data(value),
        Err(_) => WireEvent::Malformed,
    }
}

/// Extract the incremental assistant fragment from a data payload.
///
/// The fragment lives at `choices[0].delta.content`; a payload without
/// it (role announcements, finish chunks, usage reports) simply
/// contributes no text.
#[must_use]
pub fn delta_text(payload: &Value) -> Option<&str> {
    payload
        .get("choices")?
        .get(0)?
        .get("delta")?
        .get("content")?
        .as_str()
}
