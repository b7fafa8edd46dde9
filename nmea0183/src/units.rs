//! Unit conversions for NMEA field values

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Convert a `DDMM.MMMM` / `DDDMM.MMMM` magnitude to decimal degrees
pub fn ddmm_to_decimal_degrees(raw: f64) -> f64 {
    let degrees = (raw / 100.0).floor();
    let minutes = raw - degrees * 100.0;
    degrees + minutes / 60.0
}

/// Southern latitudes and western longitudes are negative
pub fn apply_hemisphere(degrees: f64, hemisphere: Option<&str>) -> f64 {
    match hemisphere {
        Some("S") | Some("W") => -degrees,
        _ => degrees,
    }
}

/// Split an `HHMMSS(.sss)` time of day into a `NaiveTime`
///
/// Returns `None` for negative, non-finite or out-of-range values.
pub fn utc_time_of_day(t: f64) -> Option<NaiveTime> {
    if !t.is_finite() || t < 0.0 {
        return None;
    }
    let hours = (t / 1.0e4).floor();
    let minutes = ((t - hours * 1.0e4) / 1.0e2).floor();
    let seconds = (t - hours * 1.0e4 - minutes * 1.0e2).floor();
    let micros = ((t - hours * 1.0e4 - minutes * 1.0e2 - seconds) * 1.0e6).floor();

    if hours > 23.0 || minutes > 59.0 || seconds > 59.0 {
        return None;
    }
    NaiveTime::from_hms_micro_opt(hours as u32, minutes as u32, seconds as u32, micros as u32)
}

/// Parse a six digit `DDMMYY` date; the century is always 2000
pub fn utc_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u32 = raw[0..2].parse().ok()?;
    let month: u32 = raw[2..4].parse().ok()?;
    let year: i32 = raw[4..6].parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

/// Combine an RMC time field and date field into a UTC instant
pub fn utc_timestamp(time: &str, date: &str) -> Option<DateTime<Utc>> {
    let time_of_day = utc_time_of_day(time.parse::<f64>().ok()?)?;
    let date = utc_date(date)?;
    Some(date.and_time(time_of_day).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_latitude_conversion() {
        assert_abs_diff_eq!(ddmm_to_decimal_degrees(4807.038), 48.1173, epsilon = 1e-9);
    }

    #[test]
    fn test_longitude_conversion_west() {
        let degrees = apply_hemisphere(ddmm_to_decimal_degrees(1131.000), Some("W"));
        assert_abs_diff_eq!(degrees, -11.516666666666667, epsilon = 1e-9);
    }

    #[test]
    fn test_hemisphere_defaults_positive() {
        assert_eq!(apply_hemisphere(10.5, Some("N")), 10.5);
        assert_eq!(apply_hemisphere(10.5, Some("E")), 10.5);
        assert_eq!(apply_hemisphere(10.5, None), 10.5);
        assert_eq!(apply_hemisphere(10.5, Some("S")), -10.5);
    }

    #[test]
    fn test_degrees_round_trip() {
        for expected in [0.0_f64, 1.5, 45.123456, 89.999, 179.87654] {
            let degrees = expected.floor();
            let encoded = degrees * 100.0 + (expected - degrees) * 60.0;
            assert_abs_diff_eq!(ddmm_to_decimal_degrees(encoded), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_time_of_day() {
        let time = utc_time_of_day(123519.0).unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
        assert_eq!(time.nanosecond(), 0);
    }

    #[test]
    fn test_time_of_day_fraction() {
        let time = utc_time_of_day(83559.25).unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (8, 35, 59));
        assert_eq!(time.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_time_of_day_out_of_range() {
        assert!(utc_time_of_day(246000.0).is_none());
        assert!(utc_time_of_day(126000.0).is_none());
        assert!(utc_time_of_day(123560.0).is_none());
        assert!(utc_time_of_day(-1.0).is_none());
        assert!(utc_time_of_day(f64::NAN).is_none());
    }

    #[test]
    fn test_date() {
        let date = utc_date("230394").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2094, 3, 23));
        let date = utc_date("091202").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2002, 12, 9));
    }

    #[test]
    fn test_impossible_dates() {
        assert!(utc_date("310424").is_none());
        assert!(utc_date("290223").is_none());
        assert!(utc_date("001324").is_none());
        assert!(utc_date("01012").is_none());
        assert!(utc_date("0101a4").is_none());
    }

    #[test]
    fn test_timestamp() {
        let ts = utc_timestamp("083559.00", "091202").unwrap();
        assert_eq!(ts.timestamp(), 1039422959);
        assert!(utc_timestamp("083559.00", "310402").is_none());
        assert!(utc_timestamp("noon", "091202").is_none());
    }
}
