//! # saathi-wire — incremental wire decoder
//!
//! Turns the raw byte chunks of a `text/event-stream` response into
//! classified events, tolerating arbitrary chunk split points:
//! mid-line, mid-multibyte-character, or inside a JSON payload.
//!
//! Layers, leaves first:
//!
//! - [`ChunkDecoder`] — incremental UTF-8 decoding; a partial multibyte
//!   sequence at a chunk boundary is held and completed by the next
//!   chunk, never decoded eagerly.
//! - [`FrameReader`] — a persistent raw buffer that yields complete
//!   newline-delimited frames (CR-trimmed) and supports pushing a
//!   frame back when it turns out to be incomplete.
//! - [`classify`] — maps one frame to a [`WireEvent`]: keep-alive
//!   comment, blank, `[DONE]` sentinel, JSON data payload, or
//!   malformed.
//! - [`delta_text`] — extracts the incremental assistant fragment at
//!   `choices[0].delta.content` from a data payload.
//!
//! The malformed/push-back pairing is the correctness-critical part:
//! when a data frame's JSON fails to parse, the caller must push the
//! frame back onto the reader and stop extracting until more bytes
//! arrive, so payloads split across transport chunks are re-assembled
//! instead of dropped.

pub mod event;
pub mod frames;

pub use event::{WireEvent, classify, delta_text};
pub use frames::{ChunkDecoder, FrameReader};
