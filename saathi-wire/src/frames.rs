//! Chunk-to-frame layer: incremental UTF-8 decoding and newline framing.

/// Incremental UTF-8 decoder.
///
/// Transport chunks can split a multibyte character; the undecodable
/// tail of each chunk is carried over and prepended to the next one.
/// Byte sequences that are invalid outright (not merely incomplete)
/// are replaced with U+FFFD and decoding continues.
#[derive(Debug, Default)]
pub struct ChunkDecoder {
    /// Incomplete trailing multibyte sequence from the previous chunk.
    pending: Vec<u8>,
}

impl ChunkDecoder {
    /// Create a decoder with no carried-over bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one transport chunk, completing any sequence held from
    /// the previous call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        let mut out = String::with_capacity(bytes.len());
        let mut rest: &[u8] = &bytes;
        loop {
            match std::str::from_utf8(rest) {
                Ok(s) => {
                    out.push_str(s);
                    break;
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&rest[..valid]));
                    match err.error_len() {
                        // Invalid sequence: substitute and keep going.
                        Some(len) => {
                            out.push('\u{FFFD}');
                            rest = &rest[valid + len..];
                        }
                        // Incomplete sequence at the end: hold it for
                        // the next chunk.
                        None => {
                            self.pending = rest[valid..].to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Bytes currently held back waiting for completion.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }
}

/// Splits decoded text into complete, newline-delimited frames.
///
/// The internal buffer persists across chunks: after each extraction
/// cycle it holds at most one trailing incomplete frame plus anything
/// explicitly pushed back. A frame is only ever yielded once its
/// terminating newline has arrived; a final unterminated fragment at
/// end-of-stream is never emitted.
#[derive(Debug, Default)]
pub struct FrameReader {
    buf: String,
}

impl FrameReader {
    /// Create a reader with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append decoded chunk text to the buffer.
    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Remove and return the next complete frame, if one exists.
    ///
    /// The frame is returned without its terminating newline; one
    /// trailing carriage return is trimmed if present.
    pub fn next_frame(&mut self) -> Option<String> {
        let pos = self.buf.find('\n')?;
        let mut frame: String = self.buf.drain(..=pos).collect();
        frame.pop();
        if frame.ends_with('\r') {
            frame.pop();
        }
        Some(frame)
    }

    /// Push a frame back onto the front of the buffer, restoring its
    /// terminating newline.
    ///
    /// Used when a frame classified as malformed may actually be the
    /// first half of a payload split across transport chunks: the next
    /// chunk's bytes will append behind it and re-split.
    pub fn push_back(&mut self, frame: &str) {
        self.buf.insert(0, '\n');
        self.buf.insert_str(0, frame);
    }

    /// The unresolved remainder (at most one incomplete frame plus any
    /// pushed-back content).
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buf
    }
}
