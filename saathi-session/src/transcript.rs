//! Folding streamed delta fragments into the transcript.

use saathi_types::{Role, Turn};

/// Apply the accumulated assistant text to the transcript.
///
/// The accumulated text is the full answer so far, not an increment:
/// each call rewrites the trailing assistant turn's content, creating
/// that turn on the first fragment of an exchange.
pub(crate) fn fold_delta(turns: &mut Vec<Turn>, accumulated: &str) {
    match turns.last_mut() {
        Some(last) if last.role == Role::Assistant => {
            last.content.clear();
            last.content.push_str(accumulated);
        }
        _ => turns.push(Turn::assistant(accumulated)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fragment_creates_assistant_turn() {
        let mut turns = vec![Turn::user("I have a fever")];
        fold_delta(&mut turns, "Please");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1], Turn::assistant("Please"));
    }

    #[test]
    fn later_fragments_rewrite_in_place() {
        let mut turns = vec![Turn::user("I have a fever")];
        fold_delta(&mut turns, "Please");
        fold_delta(&mut turns, "Please rest.");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].content, "Please rest.");
    }

    #[test]
    fn trailing_user_turn_never_absorbs_text() {
        let mut turns = vec![Turn::assistant("Hello!"), Turn::user("hi")];
        fold_delta(&mut turns, "How can I help?");
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].content, "hi");
        assert_eq!(turns[2].content, "How can I help?");
    }
}
