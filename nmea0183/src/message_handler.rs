use crate::sentence::ValidatedSentence;
use crate::sentences::Decoded;

/// Trait for components that consume checksum-verified sentences
///
/// Implementations receive every accepted sentence and decide internally which
/// kinds they care about, ignoring the others.
pub trait SentenceHandler {
    /// Process one accepted sentence and report what was decoded from it
    fn handle_sentence(&mut self, sentence: &ValidatedSentence) -> Decoded;
}
