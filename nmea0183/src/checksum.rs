//! XOR checksum validation of framed sentences

use tracing::debug;

use crate::error::{MalformedReason, SentenceError};
use crate::sentence::ValidatedSentence;

const START_DELIMITER: char = '$';
const CHECKSUM_DELIMITER: char = '*';

/// XOR of every byte between `$` and `*`, exclusive of both
pub fn compute_checksum(body: &[u8]) -> u8 {
    body.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Build a wire sentence from a body without delimiters, e.g. `GNGSV,1,1,00`
/// becomes `$GNGSV,1,1,00*67`.
pub fn append_checksum(body: &str) -> String {
    format!("${}*{:02X}", body, compute_checksum(body.as_bytes()))
}

/// Check a framed line and split it into fields
///
/// Bytes are read as single-byte character codes. Exactly one `*` must be
/// present, the payload must start with `$` and the checksum field must be one
/// or two hex digits (trailing whitespace such as a `\r` is ignored).
pub fn validate(frame: &[u8]) -> Result<ValidatedSentence, SentenceError> {
    let text: String = frame.iter().map(|&b| b as char).collect();

    let delimiters = text.matches(CHECKSUM_DELIMITER).count();
    let (payload, checksum_field) = match delimiters {
        0 => return Err(MalformedReason::MissingChecksumDelimiter.into()),
        1 => text
            .split_once(CHECKSUM_DELIMITER)
            .ok_or(MalformedReason::MissingChecksumDelimiter)?,
        n => return Err(MalformedReason::MultipleChecksumDelimiters(n).into()),
    };

    let body = payload
        .strip_prefix(START_DELIMITER)
        .ok_or(MalformedReason::MissingStartDelimiter)?;

    let transmitted = parse_checksum_field(checksum_field)?;
    // Characters here all come from single bytes, so chars map back 1:1
    let computed = body.chars().fold(0u8, |acc, c| acc ^ (c as u32 as u8));

    if transmitted != computed {
        debug!("Checksum mismatch on {:?}: transmitted {:02X}, computed {:02X}", payload, transmitted, computed);
        return Err(SentenceError::ChecksumMismatch { transmitted, computed });
    }

    let mut parts = payload.split(',');
    let talker_id = parts.next().unwrap_or_default().to_string();
    let fields = parts.map(str::to_string).collect();

    Ok(ValidatedSentence {
        talker_id,
        fields,
        checksum_ok: true,
    })
}

fn parse_checksum_field(field: &str) -> Result<u8, MalformedReason> {
    let digits = field.trim_end_matches(|c: char| c.is_ascii_whitespace());
    let well_formed = (1..=2).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !well_formed {
        return Err(MalformedReason::InvalidChecksumField(field.to_string()));
    }
    u8::from_str_radix(digits, 16).map_err(|_| MalformedReason::InvalidChecksumField(field.to_string()))
}
