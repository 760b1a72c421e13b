//! The [`ChatBackend`] trait connecting sessions to an inference gateway.

use std::future::Future;

use crate::error::ChatError;
use crate::stream::StreamHandle;
use crate::types::{Language, Turn};

/// A backend that answers a conversation with a streamed response.
///
/// Uses RPITIT (return-position `impl Trait` in traits) and is
/// intentionally NOT object-safe; compose with generics
/// (`ChatSession<B: ChatBackend>`).
///
/// One call corresponds to one outbound request carrying the full
/// transcript plus the new user turn. Status-level failures (429, 402,
/// other non-success) are reported as `Err` before any event is
/// produced; mid-stream failures arrive as
/// [`StreamEvent::Error`](crate::stream::StreamEvent::Error).
pub trait ChatBackend: Send + Sync {
    /// Send the conversation and return a handle to the streamed answer.
    fn stream_chat(
        &self,
        turns: &[Turn],
        language: Language,
    ) -> impl Future<Output = Result<StreamHandle, ChatError>> + Send;
}
