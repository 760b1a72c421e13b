//! SSE streaming support for the chat gateway.
//!
//! Drives the `saathi-wire` decoder over the response byte stream and
//! maps wire events to [`StreamEvent`] variants. The stream ends at
//! the `[DONE]` sentinel, at transport end-of-stream, or on a
//! transport read error.

use futures::{Stream, StreamExt};
use reqwest::Response;
use saathi_types::{ChatError, StreamEvent, StreamHandle};
use saathi_wire::{ChunkDecoder, FrameReader, WireEvent, classify, delta_text};

/// Wrap an HTTP response body into a [`StreamHandle`] that emits
/// [`StreamEvent`]s.
pub(crate) fn stream_chat(response: Response) -> StreamHandle {
    let byte_stream = response.bytes_stream();
    StreamHandle::new(parse_sse_stream(byte_stream))
}

/// Parse a raw byte stream into a stream of [`StreamEvent`]s.
///
/// Reading the next chunk is the only suspension point: all framing,
/// classification and extraction between reads runs without awaiting,
/// so consumers observe whole fragments, never torn ones.
///
/// Malformed-frame recovery: a data frame whose payload fails to parse
/// is pushed back onto the reader and extraction stops for the current
/// chunk. When the same frame comes up again after more bytes arrived,
/// it is rejoined with the following lines before re-parsing, so a
/// JSON payload that legitimately spans a newline (and was therefore
/// split into nonsense lines) reassembles into exactly one event. The
/// rejoin gives up as soon as a following line stands alone as a
/// sentinel or valid payload: one corrupt frame gets dropped rather
/// than swallowing the rest of the stream.
fn parse_sse_stream<E>(
    byte_stream: impl Stream<Item = Result<bytes::Bytes, E>> + Send + 'static,
) -> impl Stream<Item = StreamEvent> + Send + 'static
where
    E: std::error::Error + Send + Sync + 'static,
{
    async_stream::stream! {
        let mut decoder = ChunkDecoder::new();
        let mut reader = FrameReader::new();
        // Set when a frame was pushed back after a parse failure; the
        // head frame of the next cycle is that same frame, retried.
        let mut retry_head = false;
        let mut bytes_stream = std::pin::pin!(byte_stream);

        'read: while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    tracing::debug!(error = %e, "stream read error");
                    yield StreamEvent::Error(ChatError::transport(e));
                    return;
                }
            };

            reader.push(&decoder.decode(&chunk));

            'frames: while let Some(first) = reader.next_frame() {
                let retry = std::mem::take(&mut retry_head);
                let mut frame = first;
                loop {
                    match classify(&frame) {
                        WireEvent::Data(payload) => {
                            if let Some(text) = delta_text(&payload)
                                && !text.is_empty()
                            {
                                yield StreamEvent::Delta(text.to_string());
                            }
                            continue 'frames;
                        }
                        WireEvent::Sentinel => {
                            yield StreamEvent::Done;
                            return;
                        }
                        WireEvent::Blank | WireEvent::Comment | WireEvent::Unrecognized => {
                            continue 'frames;
                        }
                        WireEvent::Malformed => {
                            // On retry, the payload may continue past the
                            // newline it was split at: rejoin and re-parse.
                            // A follow-up frame that stands alone as a
                            // sentinel or valid payload means the held
                            // frame will never parse; drop it instead of
                            // absorbing the rest of the stream.
                            if retry && let Some(next) = reader.next_frame() {
                                match classify(&next) {
                                    WireEvent::Sentinel | WireEvent::Data(_) => {
                                        tracing::debug!(
                                            dropped = frame.len(),
                                            "dropping frame that never became parseable"
                                        );
                                        frame = next;
                                    }
                                    _ => {
                                        frame.push('\n');
                                        frame.push_str(&next);
                                    }
                                }
                            } else {
                                reader.push_back(&frame);
                                retry_head = true;
                                continue 'read;
                            }
                        }
                    }
                }
            }
        }

        // End-of-stream without a sentinel: any unterminated remainder
        // in the reader is discarded, never emitted.
        if !reader.pending().is_empty() {
            tracing::debug!(
                pending = reader.pending().len(),
                "discarding unterminated frame at end of stream"
            );
        }
    }
}
