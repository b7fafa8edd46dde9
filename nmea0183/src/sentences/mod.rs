//! Field decoders for the supported sentence kinds

pub mod gga;
pub mod rmc;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::FieldError;
use crate::sentence::{SentenceKind, ValidatedSentence};

pub use gga::FixQuality;
pub use rmc::{PositionStatus, PositioningMode};

/// Sparse set of navigation fields carried by one sentence
///
/// A `None` means the sentence said nothing about that field; it never
/// means "clear the field".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldUpdate {
    pub utc_timestamp: Option<DateTime<Utc>>,
    pub position_status: Option<PositionStatus>,
    pub mode: Option<PositioningMode>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub quality: Option<FixQuality>,
    pub num_satellites: Option<u32>,
    pub horizontal_dilution: Option<f64>,
    pub altitude: Option<f64>,
    pub geoid_undulation: Option<f64>,
    pub speed_over_ground: Option<f64>,
    pub course_over_ground: Option<f64>,
}

impl FieldUpdate {
    pub fn is_empty(&self) -> bool {
        *self == FieldUpdate::default()
    }
}

/// Output of the decoder for one validated sentence
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub kind: SentenceKind,
    pub update: FieldUpdate,
    /// Fields that were present but could not be decoded
    pub field_errors: Vec<FieldError>,
}

/// Decode a validated sentence into a field update
///
/// Unknown sentence kinds produce an empty update.
pub fn decode(sentence: &ValidatedSentence) -> Decoded {
    let kind = sentence.kind();
    let mut reader = FieldReader::new(sentence);
    let update = match kind {
        SentenceKind::Gga => gga::decode(&mut reader),
        SentenceKind::Rmc => rmc::decode(&mut reader),
        SentenceKind::Unknown(_) => FieldUpdate::default(),
    };

    for error in &reader.errors {
        debug!("{} field dropped: {}", kind, error);
    }

    Decoded {
        kind,
        update,
        field_errors: reader.errors,
    }
}

/// Field accessor that records parse failures instead of aborting the sentence
pub(crate) struct FieldReader<'a> {
    sentence: &'a ValidatedSentence,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    fn new(sentence: &'a ValidatedSentence) -> Self {
        Self {
            sentence,
            errors: Vec::new(),
        }
    }

    pub(crate) fn text(&self, index: usize) -> Option<&'a str> {
        self.sentence.field(index)
    }

    pub(crate) fn number<T: FromStr>(&mut self, index: usize, name: &'static str) -> Option<T> {
        let value = self.text(index)?;
        match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.errors.push(FieldError::InvalidNumber {
                    field: name,
                    value: value.to_string(),
                });
                None
            }
        }
    }

    pub(crate) fn push_error(&mut self, error: FieldError) {
        self.errors.push(error);
    }
}
