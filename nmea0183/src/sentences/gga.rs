use std::fmt;

use serde::Serialize;

use super::{FieldReader, FieldUpdate};
use crate::units::{apply_hemisphere, ddmm_to_decimal_degrees};

// Field positions after the talker id
const LATITUDE: usize = 1;
const LATITUDE_HEMISPHERE: usize = 2;
const LONGITUDE: usize = 3;
const LONGITUDE_HEMISPHERE: usize = 4;
const QUALITY: usize = 5;
const SATELLITES: usize = 6;
const HDOP: usize = 7;
const ALTITUDE: usize = 8;
const GEOID_UNDULATION: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixQuality {
    Invalid,
    SinglePoint,
    PseudorangeDifferential,
    RtkFixed,
    RtkFloating,
    DeadReckoning,
    ManualInput,
    Simulator,
    Waas,
}

impl FixQuality {
    /// Map a GGA quality indicator. Code 3 (PPS) and anything outside 0–9 are invalid.
    pub fn from_code(code: &str) -> Self {
        match code.trim().parse::<u8>() {
            Ok(1) => FixQuality::SinglePoint,
            Ok(2) => FixQuality::PseudorangeDifferential,
            Ok(4) => FixQuality::RtkFixed,
            Ok(5) => FixQuality::RtkFloating,
            Ok(6) => FixQuality::DeadReckoning,
            Ok(7) => FixQuality::ManualInput,
            Ok(8) => FixQuality::Simulator,
            Ok(9) => FixQuality::Waas,
            _ => FixQuality::Invalid,
        }
    }
}

impl fmt::Display for FixQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            FixQuality::Invalid => "invalid",
            FixQuality::SinglePoint => "single point",
            FixQuality::PseudorangeDifferential => "pseudorange differential",
            FixQuality::RtkFixed => "RTK fixed",
            FixQuality::RtkFloating => "RTK floating",
            FixQuality::DeadReckoning => "dead reckoning",
            FixQuality::ManualInput => "manual input",
            FixQuality::Simulator => "simulator",
            FixQuality::Waas => "WAAS",
        };
        write!(f, "{}", label)
    }
}

/// Positioning fix: position, quality, satellites, HDOP, altitude, geoid undulation
pub(crate) fn decode(reader: &mut FieldReader) -> FieldUpdate {
    let latitude = reader
        .number::<f64>(LATITUDE, "latitude")
        .map(|raw| apply_hemisphere(ddmm_to_decimal_degrees(raw), reader.text(LATITUDE_HEMISPHERE)));
    let longitude = reader
        .number::<f64>(LONGITUDE, "longitude")
        .map(|raw| apply_hemisphere(ddmm_to_decimal_degrees(raw), reader.text(LONGITUDE_HEMISPHERE)));

    FieldUpdate {
        latitude,
        longitude,
        quality: reader.text(QUALITY).map(FixQuality::from_code),
        num_satellites: reader.number(SATELLITES, "num_satellites"),
        horizontal_dilution: reader.number(HDOP, "horizontal_dilution"),
        altitude: reader.number(ALTITUDE, "altitude"),
        geoid_undulation: reader.number(GEOID_UNDULATION, "geoid_undulation"),
        ..Default::default()
    }
}
