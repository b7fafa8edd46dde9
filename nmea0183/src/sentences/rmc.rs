use std::fmt;

use serde::Serialize;

use super::{FieldReader, FieldUpdate};
use crate::error::FieldError;
use crate::units::utc_timestamp;

const UTC_TIME: usize = 0;
const STATUS: usize = 1;
const SPEED_OVER_GROUND: usize = 6;
const COURSE_OVER_GROUND: usize = 7;
const UTC_DATE: usize = 8;
const MODE: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionStatus {
    Valid,
    #[default]
    Invalid,
}

impl PositionStatus {
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "A" => PositionStatus::Valid,
            _ => PositionStatus::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositioningMode {
    #[default]
    Invalid,
    Autonomous,
    Differential,
    DeadReckoning,
}

impl PositioningMode {
    pub fn from_indicator(indicator: &str) -> Self {
        match indicator {
            "A" => PositioningMode::Autonomous,
            "D" => PositioningMode::Differential,
            "E" => PositioningMode::DeadReckoning,
            _ => PositioningMode::Invalid,
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PositionStatus::Valid => write!(f, "valid"),
            PositionStatus::Invalid => write!(f, "invalid"),
        }
    }
}

impl fmt::Display for PositioningMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PositioningMode::Invalid => write!(f, "invalid"),
            PositioningMode::Autonomous => write!(f, "autonomous"),
            PositioningMode::Differential => write!(f, "differential"),
            PositioningMode::DeadReckoning => write!(f, "dead-reckoning"),
        }
    }
}

/// Recommended minimum data: UTC instant, status, speed, course, mode
pub(crate) fn decode(reader: &mut FieldReader) -> FieldUpdate {
    let timestamp = match (reader.text(UTC_TIME), reader.text(UTC_DATE)) {
        (Some(time), Some(date)) => {
            let timestamp = utc_timestamp(time, date);
            if timestamp.is_none() {
                reader.push_error(FieldError::InvalidTimestamp {
                    time: time.to_string(),
                    date: date.to_string(),
                });
            }
            timestamp
        }
        _ => None,
    };

    FieldUpdate {
        utc_timestamp: timestamp,
        position_status: reader.text(STATUS).map(PositionStatus::from_flag),
        speed_over_ground: reader.number(SPEED_OVER_GROUND, "speed_over_ground"),
        course_over_ground: reader.number(COURSE_OVER_GROUND, "course_over_ground"),
        mode: reader.text(MODE).map(PositioningMode::from_indicator),
        ..Default::default()
    }
}
