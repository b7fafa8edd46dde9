use tracing::{debug, trace};

use crate::byte_source::ByteSource;
use crate::checksum::validate;
use crate::error::{MalformedReason, SentenceError, TransportError};
use crate::framer::{Framed, SentenceFramer};
use crate::message_handler::SentenceHandler;
use crate::navigation_state::NavigationState;
use crate::sentence::SentenceKind;
use crate::sentences::Decoded;

/// What one poll cycle produced
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The receiver had nothing pending
    Empty,
    /// A frame arrived but failed framing or checksum checks; state untouched
    Rejected(SentenceError),
    /// A valid sentence of a kind nobody decodes
    Ignored(SentenceKind),
    /// A valid sentence was decoded and merged
    Applied(Decoded),
}

/// One receiver's decode pipeline: framer, validator, decoder and accumulated state
///
/// The caller drives [`Receiver::poll`] at its own cadence and reads the state
/// between cycles. Only a transport fault comes back as an error.
pub struct Receiver<H = NavigationState> {
    framer: SentenceFramer,
    handler: H,
}

impl Receiver<NavigationState> {
    pub fn new() -> Self {
        Self::with_framer(SentenceFramer::new())
    }

    pub fn with_framer(framer: SentenceFramer) -> Self {
        Self::with_handler(framer, NavigationState::new())
    }

    pub fn state(&self) -> &NavigationState {
        &self.handler
    }

    /// Owned copy of the state for a consumer that outlives the next cycle
    pub fn snapshot(&self) -> NavigationState {
        self.handler.clone()
    }
}

impl<H: SentenceHandler> Receiver<H> {
    pub fn with_handler(framer: SentenceFramer, handler: H) -> Self {
        Self { framer, handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Run one framing/validation/decoding cycle against `source`
    pub fn poll<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<PollOutcome, TransportError> {
        let frame = match self.framer.next_frame(source)? {
            Framed::Sentence(frame) => frame,
            Framed::Empty => return Ok(PollOutcome::Empty),
            Framed::Overrun(len) => {
                debug!("Dropping {} byte line without terminator", len);
                return Ok(PollOutcome::Rejected(MalformedReason::Overrun(len).into()));
            }
        };

        let sentence = match validate(&frame) {
            Ok(sentence) => sentence,
            Err(e) => {
                debug!("Rejected sentence: {}", e);
                return Ok(PollOutcome::Rejected(e));
            }
        };

        let kind = sentence.kind();
        if let SentenceKind::Unknown(_) = kind {
            trace!("Ignoring {} sentence", kind);
            return Ok(PollOutcome::Ignored(kind));
        }

        Ok(PollOutcome::Applied(self.handler.handle_sentence(&sentence)))
    }
}

impl Default for Receiver<NavigationState> {
    fn default() -> Self {
        Self::new()
    }
}
