use tracing::trace;

use crate::byte_source::{ByteSource, LINE_TERMINATOR, NO_DATA};
use crate::error::TransportError;

/// NMEA-0183 caps a sentence at 82 characters; leave room for noisy buses.
pub const DEFAULT_MAX_FRAME_LEN: usize = 256;

/// Bytes of one candidate sentence, terminator excluded
pub type RawFrame = Vec<u8>;

/// Result of one framing attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framed {
    /// A complete line, ready for checksum validation
    Sentence(RawFrame),
    /// The receiver has nothing pending (sentinel byte or a bare terminator)
    Empty,
    /// The line grew past the limit without a terminator and was dropped
    Overrun(usize),
}

/// Line framer for a receiver that streams sentences byte by byte
///
/// Each call to [`SentenceFramer::next_frame`] starts a fresh frame; nothing is
/// carried over between calls.
///
/// # Usage
///
/// ```no_run
/// # use nmea0183::{ByteSource, Framed, SentenceFramer};
/// # fn poll(source: &mut impl ByteSource) -> Result<(), nmea0183::TransportError> {
/// let framer = SentenceFramer::new();
/// if let Framed::Sentence(frame) = framer.next_frame(source)? {
///     println!("{} bytes", frame.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SentenceFramer {
    max_len: usize,
}

impl SentenceFramer {
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_FRAME_LEN)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Read bytes until a line terminator, the no-data sentinel or the length limit
    ///
    /// A sentinel anywhere in the line abandons the partial frame. Bus faults
    /// are returned unchanged so the caller can stop polling.
    pub fn next_frame<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<Framed, TransportError> {
        let mut frame = RawFrame::new();
        loop {
            let byte = source.read_byte()?;
            match byte {
                NO_DATA => {
                    if !frame.is_empty() {
                        trace!("Sentinel after {} bytes, dropping partial frame", frame.len());
                    }
                    return Ok(Framed::Empty);
                }
                LINE_TERMINATOR => {
                    if frame.is_empty() {
                        return Ok(Framed::Empty);
                    }
                    return Ok(Framed::Sentence(frame));
                }
                _ => {
                    if frame.len() >= self.max_len {
                        return Ok(Framed::Overrun(frame.len() + 1));
                    }
                    frame.push(byte);
                }
            }
        }
    }
}

impl Default for SentenceFramer {
    fn default() -> Self {
        Self::new()
    }
}
