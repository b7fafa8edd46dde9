use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::message_handler::SentenceHandler;
use crate::sentence::ValidatedSentence;
use crate::sentences::{Decoded, FieldUpdate, FixQuality, PositionStatus, PositioningMode, decode};

/// Latest known navigation fields, merged across sentence kinds
///
/// Every field starts out unknown and only changes when a sentence carries a
/// value for it. Nothing is ever reset back to unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavigationState {
    pub utc_timestamp: Option<DateTime<Utc>>,
    pub position_status: PositionStatus,
    pub mode: PositioningMode,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub quality: Option<FixQuality>,
    pub num_satellites: Option<u32>,
    pub horizontal_dilution: Option<f64>,
    pub altitude: Option<f64>,
    pub geoid_undulation: Option<f64>,
    pub speed_over_ground: Option<f64>,  // knots
    pub course_over_ground: Option<f64>, // degrees
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every field present in `update`, leave the rest alone
    pub fn apply(&mut self, update: &FieldUpdate) {
        merge(&mut self.utc_timestamp, update.utc_timestamp);
        if let Some(status) = update.position_status {
            self.position_status = status;
        }
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
        merge(&mut self.latitude, update.latitude);
        merge(&mut self.longitude, update.longitude);
        merge(&mut self.quality, update.quality);
        merge(&mut self.num_satellites, update.num_satellites);
        merge(&mut self.horizontal_dilution, update.horizontal_dilution);
        merge(&mut self.altitude, update.altitude);
        merge(&mut self.geoid_undulation, update.geoid_undulation);
        merge(&mut self.speed_over_ground, update.speed_over_ground);
        merge(&mut self.course_over_ground, update.course_over_ground);
    }

    /// Fractional seconds since the Unix epoch of the last UTC fix
    pub fn unix_seconds(&self) -> Option<f64> {
        self.utc_timestamp
            .map(|ts| ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_micros()) * 1e-6)
    }

    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

fn merge<T>(field: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *field = value;
    }
}

impl SentenceHandler for NavigationState {
    fn handle_sentence(&mut self, sentence: &ValidatedSentence) -> Decoded {
        let decoded = decode(sentence);
        self.apply(&decoded.update);
        decoded
    }
}

struct OrUnknown<'a, T>(&'a Option<T>, usize);

impl<T: fmt::Display> fmt::Display for OrUnknown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:.*}", self.1, value),
            None => write!(f, "unknown"),
        }
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UTC:")?;
        match self.utc_timestamp {
            Some(ts) => writeln!(f, "    Time: {}", ts.format("%Y-%m-%d %H:%M:%S%.3f"))?,
            None => writeln!(f, "    Time: unknown")?,
        }
        writeln!(f, "    Seconds: {} s", OrUnknown(&self.unix_seconds(), 3))?;
        writeln!(f, "Position:")?;
        writeln!(f, "    Status: {}", self.position_status)?;
        writeln!(f, "    Latitude: {} deg", OrUnknown(&self.latitude, 5))?;
        writeln!(f, "    Longitude: {} deg", OrUnknown(&self.longitude, 5))?;
        writeln!(f, "    Altitude: {} m", OrUnknown(&self.altitude, 2))?;
        writeln!(f, "    Geoid undulation: {} m", OrUnknown(&self.geoid_undulation, 2))?;
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(f, "Quality: {}", OrUnknown(&self.quality, 0))?;
        writeln!(f, "Number of satellites: {}", OrUnknown(&self.num_satellites, 0))?;
        writeln!(f, "Horizontal dilution of precision: {}", OrUnknown(&self.horizontal_dilution, 1))?;
        writeln!(f, "Speed over ground: {} knots", OrUnknown(&self.speed_over_ground, 2))?;
        write!(f, "Course over ground: {} deg", OrUnknown(&self.course_over_ground, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{append_checksum, validate};
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    fn handle(state: &mut NavigationState, body: &str) -> Decoded {
        let sentence = validate(append_checksum(body).as_bytes()).unwrap();
        state.handle_sentence(&sentence)
    }

    #[test]
    fn test_new_state_is_unknown() {
        let state = NavigationState::new();
        assert!(state.utc_timestamp.is_none());
        assert_eq!(state.position_status, PositionStatus::Invalid);
        assert_eq!(state.mode, PositioningMode::Invalid);
        assert!(!state.has_position());
        assert!(state.quality.is_none());
        assert!(state.num_satellites.is_none());
        assert!(state.unix_seconds().is_none());
    }

    #[test]
    fn test_apply_only_present_fields() {
        let mut state = NavigationState::new();
        state.apply(&FieldUpdate {
            altitude: Some(545.4),
            latitude: Some(48.1),
            ..Default::default()
        });
        state.apply(&FieldUpdate {
            latitude: Some(48.2),
            ..Default::default()
        });
        assert_eq!(state.altitude, Some(545.4));
        assert_eq!(state.latitude, Some(48.2));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let update = FieldUpdate {
            latitude: Some(48.1173),
            quality: Some(FixQuality::RtkFloating),
            mode: Some(PositioningMode::Differential),
            ..Default::default()
        };
        let mut once = NavigationState::new();
        once.apply(&update);
        let mut twice = once.clone();
        twice.apply(&update);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sentence_kinds_coexist() {
        let mut state = NavigationState::new();
        handle(&mut state, "GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        handle(&mut state, "GNRMC,123519.00,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A");

        assert_abs_diff_eq!(state.latitude.unwrap(), 48.1173, epsilon = 1e-6);
        assert_eq!(state.num_satellites, Some(8));
        assert_eq!(state.speed_over_ground, Some(22.4));
        assert_eq!(state.position_status, PositionStatus::Valid);
        assert_eq!(state.mode, PositioningMode::Autonomous);
        assert_eq!(state.utc_timestamp, Some(Utc.with_ymd_and_hms(2094, 3, 23, 12, 35, 19).unwrap()));
    }

    #[test]
    fn test_partial_sentence_keeps_previous_values() {
        let mut state = NavigationState::new();
        handle(&mut state, "GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        handle(&mut state, "GNGGA,123520,,,,,0,00,99.99,,,,,,");

        assert_abs_diff_eq!(state.latitude.unwrap(), 48.1173, epsilon = 1e-6);
        assert_eq!(state.altitude, Some(545.4));
        assert_eq!(state.geoid_undulation, Some(46.9));
        assert_eq!(state.quality, Some(FixQuality::Invalid));
        assert_eq!(state.num_satellites, Some(0));
    }

    #[test]
    fn test_invalid_timestamp_keeps_previous_timestamp() {
        let mut state = NavigationState::new();
        handle(&mut state, "GNRMC,083559.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A");
        let decoded = handle(&mut state, "GNRMC,123519.00,V,,,,,022.4,084.4,310494,,,N");

        assert_eq!(decoded.field_errors.len(), 1);
        assert_eq!(state.utc_timestamp, Some(Utc.with_ymd_and_hms(2002, 12, 9, 8, 35, 59).unwrap()));
        assert_eq!(state.position_status, PositionStatus::Invalid);
        assert_eq!(state.speed_over_ground, Some(22.4));
    }

    #[test]
    fn test_unix_seconds() {
        let mut state = NavigationState::new();
        handle(&mut state, "GNRMC,083559.25,A,,,,,,,091202,,,A");
        assert_abs_diff_eq!(state.unix_seconds().unwrap(), 1039422959.25, epsilon = 1e-6);
    }

    #[test]
    fn test_display_unknown_fields() {
        let text = NavigationState::new().to_string();
        assert!(text.contains("Time: unknown"));
        assert!(text.contains("Latitude: unknown deg"));
        assert!(text.contains("Status: invalid"));
    }

    #[test]
    fn test_display_known_fields() {
        let mut state = NavigationState::new();
        handle(&mut state, "GNGGA,123519,4807.038,N,01131.000,W,9,08,0.9,545.4,M,46.9,M,,");
        let text = state.to_string();
        assert!(text.contains("Latitude: 48.11730 deg"));
        assert!(text.contains("Longitude: -11.51667 deg"));
        assert!(text.contains("Quality: WAAS"));
        assert!(text.contains("Number of satellites: 8"));
    }

    #[test]
    fn test_serialize_snapshot() {
        let mut state = NavigationState::new();
        handle(&mut state, "GNGGA,123519,4807.038,N,01131.000,E,4,08,0.9,545.4,M,46.9,M,,");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["quality"], "rtk-fixed");
        assert_eq!(json["num_satellites"], 8);
        assert_eq!(json["position_status"], "invalid");
        assert!(json["utc_timestamp"].is_null());
    }
}
