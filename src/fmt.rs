use chrono::{DateTime, Utc};
use std::time::Duration;

// Human readable timestamp, e.g. "Aug 30, 2026, 02:05:09 PM UTC"
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M:%S %p UTC").to_string()
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

// Duration rounded up to whole seconds, with singular/plural unit
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_millis().div_ceil(1000);
    if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{} seconds", secs)
    }
}

pub fn maps_link(lat: f64, lon: f64) -> String {
    format!("https://maps.google.com/?q={},{}", lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn maps_link_uses_shortest_float_form() {
        // trailing zero drops, like the upstream link format
        assert_eq!(
            maps_link(40.7128, -74.0060),
            "https://maps.google.com/?q=40.7128,-74.006"
        );
        assert_eq!(maps_link(0.0, 0.0), "https://maps.google.com/?q=0,0");
    }

    #[test]
    fn duration_rounds_up_and_pluralizes() {
        assert_eq!(format_duration(Duration::ZERO), "0 seconds");
        assert_eq!(format_duration(Duration::from_millis(1)), "1 second");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1 second");
        assert_eq!(format_duration(Duration::from_millis(1001)), "2 seconds");
        assert_eq!(format_duration(Duration::from_secs(45)), "45 seconds");
    }

    #[test]
    fn timestamp_matches_locale_shape() {
        let at = Utc.with_ymd_and_hms(2026, 8, 30, 14, 5, 9).unwrap();
        assert_eq!(format_timestamp(at), "Aug 30, 2026, 02:05:09 PM UTC");

        let single_digit_day = Utc.with_ymd_and_hms(2026, 1, 5, 3, 4, 5).unwrap();
        assert_eq!(
            format_timestamp(single_digit_day),
            "Jan 5, 2026, 03:04:05 AM UTC"
        );
    }
}
