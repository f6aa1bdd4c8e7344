//! Lazy codepoint decoding over a buffered byte stream.

use std::io::BufRead;

use tracing::warn;

use crate::error::Result;

/// Iterator presenting a UTF-8 byte stream as a sequence of Unicode scalar
/// values.
///
/// The sequence is lazy, finite, and non-restartable. It ends at end of
/// input; a malformed byte sequence also ends it, after the last complete
/// scalar, with the condition reported on the diagnostic stream rather than
/// in the decoded output. Read errors from the underlying reader are
/// yielded as `Err` items and end the stream as well.
pub struct Codepoints<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Codepoints<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let buffered = self.reader.fill_buf()?;
        match buffered.first().copied() {
            Some(byte) => {
                self.reader.consume(1);
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

/// Sequence length implied by a UTF-8 leading byte, or `None` when the byte
/// cannot start a sequence.
fn sequence_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

impl<R: BufRead> Iterator for Codepoints<R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let first = match self.next_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(error) => {
                self.done = true;
                return Some(Err(error));
            }
        };
        let Some(len) = sequence_len(first) else {
            warn!(byte = first, "invalid UTF-8 leading byte, ending stream");
            self.done = true;
            return None;
        };
        let mut bytes = [0u8; 4];
        bytes[0] = first;
        for slot in bytes.iter_mut().take(len).skip(1) {
            match self.next_byte() {
                Ok(Some(byte)) => *slot = byte,
                Ok(None) => {
                    warn!("truncated UTF-8 sequence at end of input");
                    self.done = true;
                    return None;
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }
        // Validation is delegated to core::str; this also rejects overlong
        // encodings and surrogate values.
        match std::str::from_utf8(&bytes[..len]) {
            Ok(decoded) => decoded.chars().next().map(Ok),
            Err(_) => {
                warn!(bytes = ?&bytes[..len], "malformed UTF-8 sequence, ending stream");
                self.done = true;
                None
            }
        }
    }
}
