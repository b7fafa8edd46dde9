//! Error types for sentence framing, validation and decoding

use thiserror::Error;

/// Failure of the underlying byte source. Fatal to the polling loop.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("bus I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bus fault: {0}")]
    Bus(String),
}

/// Why a candidate frame could not be turned into a sentence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("no '*' checksum delimiter")]
    MissingChecksumDelimiter,

    #[error("{0} '*' delimiters, expected exactly one")]
    MultipleChecksumDelimiters(usize),

    #[error("payload does not start with '$'")]
    MissingStartDelimiter,

    #[error("checksum field {0:?} is not one or two hex digits")]
    InvalidChecksumField(String),

    #[error("frame exceeded {0} bytes without a line terminator")]
    Overrun(usize),
}

/// A sentence that was discarded before decoding. Never mutates state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SentenceError {
    #[error("malformed sentence: {0}")]
    Malformed(#[from] MalformedReason),

    #[error("checksum mismatch: transmitted {transmitted:02X}, computed {computed:02X}")]
    ChecksumMismatch { transmitted: u8, computed: u8 },
}

/// A single field of an accepted sentence that could not be decoded.
/// The rest of the sentence is still applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid UTC timestamp: time {time:?}, date {date:?}")]
    InvalidTimestamp { time: String, date: String },

    #[error("invalid number in field {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
