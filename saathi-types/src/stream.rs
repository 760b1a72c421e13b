//! Streaming event types for incremental chat responses.

use std::pin::Pin;

use futures::Stream;

use crate::error::ChatError;

/// An event emitted while a chat response streams in.
#[derive(Debug)]
pub enum StreamEvent {
    /// An incremental text fragment of the assistant answer.
    Delta(String),
    /// The `[DONE]` sentinel was observed; no further events follow.
    Done,
    /// The stream failed mid-response. Text already delivered via
    /// [`StreamEvent::Delta`] stays valid.
    Error(ChatError),
}

/// Handle to a streaming chat response.
pub struct StreamHandle {
    /// The stream of events. Consume with `StreamExt::next()`.
    pub receiver: Pin<Box<dyn Stream<Item = StreamEvent> + Send>>,
}

impl StreamHandle {
    /// Wrap a stream of events.
    pub fn new(stream: impl Stream<Item = StreamEvent> + Send + 'static) -> Self {
        Self {
            receiver: Box::pin(stream),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn handle_yields_events_in_order() {
        let mut handle = StreamHandle::new(futures::stream::iter(vec![
            StreamEvent::Delta("a".into()),
            StreamEvent::Delta("b".into()),
            StreamEvent::Done,
        ]));

        let mut texts = Vec::new();
        while let Some(event) = handle.receiver.next().await {
            match event {
                StreamEvent::Delta(t) => texts.push(t),
                StreamEvent::Done => break,
                StreamEvent::Error(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(texts, vec!["a", "b"]);
    }
}
