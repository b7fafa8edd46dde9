use std::fmt;

/// Sentence kinds the decoder understands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    /// Global positioning system fix data
    Gga,
    /// Recommended minimum specific GNSS data
    Rmc,
    /// Anything else, carrying the sentence formatter (e.g. "GSV")
    Unknown(String),
}

impl SentenceKind {
    /// Derive the kind from a talker id such as `$GNGGA` or `$GPRMC`.
    /// The talker prefix is ignored, only the three-letter formatter matters.
    pub fn from_talker_id(talker_id: &str) -> Self {
        let address = talker_id.strip_prefix('$').unwrap_or(talker_id);
        let formatter = match address.len().checked_sub(3) {
            Some(start) if address.is_char_boundary(start) => &address[start..],
            _ => address,
        };
        match formatter {
            "GGA" => SentenceKind::Gga,
            "RMC" => SentenceKind::Rmc,
            other => SentenceKind::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SentenceKind::Gga => write!(f, "GGA"),
            SentenceKind::Rmc => write!(f, "RMC"),
            SentenceKind::Unknown(formatter) => write!(f, "{}", formatter),
        }
    }
}

/// A checksum-verified sentence split into its comma-separated fields
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSentence {
    /// First comma field, leading `$` included
    pub talker_id: String,
    /// Remaining fields in order, possibly empty
    pub fields: Vec<String>,
    pub checksum_ok: bool,
}

impl ValidatedSentence {
    pub fn kind(&self) -> SentenceKind {
        SentenceKind::from_talker_id(&self.talker_id)
    }

    /// Field at `index`, or `None` when it is empty or past the end
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl fmt::Display for ValidatedSentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.talker_id)?;
        for field in &self.fields {
            write!(f, ",{}", field)?;
        }
        Ok(())
    }
}
