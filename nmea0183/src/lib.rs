//! NMEA-0183 Receiver Library
//!
//! Turns the byte stream of a GNSS receiver into checksum-verified sentences
//! and merges them into a single latest-known navigation state:
//! - Byte framer with "no data" sentinel detection
//! - XOR checksum validation
//! - GGA (positioning fix) and RMC (recommended minimum) field decoders
//! - Navigation state accumulator that keeps the last value of every field
//!
//! # Example
//!
//! ```no_run
//! use nmea0183::{ByteSource, PollOutcome, Receiver};
//!
//! fn run(source: &mut impl ByteSource) -> Result<(), nmea0183::TransportError> {
//!     let mut receiver = Receiver::new();
//!     loop {
//!         match receiver.poll(source)? {
//!             PollOutcome::Applied(decoded) => println!("{} decoded", decoded.kind),
//!             PollOutcome::Rejected(e) => eprintln!("Rejected: {}", e),
//!             PollOutcome::Empty | PollOutcome::Ignored(_) => {}
//!         }
//!         println!("{}", receiver.state());
//!         std::thread::sleep(std::time::Duration::from_millis(100));
//!     }
//! }
//! ```

pub mod byte_source;
pub mod checksum;
pub mod error;
pub mod framer;
pub mod message_handler;
pub mod navigation_state;
pub mod receiver;
pub mod sentence;
pub mod sentences;
pub mod units;

// Re-export commonly used types
pub use byte_source::{ByteSource, LINE_TERMINATOR, NO_DATA};
pub use checksum::{append_checksum, compute_checksum, validate};
pub use error::{FieldError, MalformedReason, SentenceError, TransportError};
pub use framer::{DEFAULT_MAX_FRAME_LEN, Framed, RawFrame, SentenceFramer};
pub use message_handler::SentenceHandler;
pub use navigation_state::NavigationState;
pub use receiver::{PollOutcome, Receiver};
pub use sentence::{SentenceKind, ValidatedSentence};
pub use sentences::{Decoded, FieldUpdate, FixQuality, PositionStatus, PositioningMode, decode};
