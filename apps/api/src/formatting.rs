//! Date and file-size formatting for display.
//!
//! Backend timestamps arrive either as RFC 3339 or as naive local date-times
//! (`2024-03-05T14:30:00`, optionally with fractional seconds). Timestamps with
//! an offset are shown in that offset's wall-clock time.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown for empty or unparseable values.
pub const PLACEHOLDER: &str = "-";

const DATE_FORMAT: &str = "%Y/%m/%d";
const DATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M";

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `2024/03/05`
pub fn format_date_only(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `2024/03/05 14:30`
pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_accepts_backend_shapes() {
        assert_eq!(format_date_only("2024-03-05T14:30:00"), "2024/03/05");
        assert_eq!(format_date_only("2024-03-05T14:30:00.123456"), "2024/03/05");
        assert_eq!(format_date_only("2024-03-05T14:30:00+08:00"), "2024/03/05");
        assert_eq!(format_date_only("2024-03-05 09:00:00"), "2024/03/05");
        assert_eq!(format_date_only("2024-03-05"), "2024/03/05");
    }

    #[test]
    fn test_date_time_keeps_offset_wall_clock() {
        assert_eq!(format_date_time("2024-03-05T23:10:00+08:00"), "2024/03/05 23:10");
        assert_eq!(format_date_time("2024-03-05T07:05:59Z"), "2024/03/05 07:05");
        assert_eq!(format_date_time("2024-03-05"), "2024/03/05 00:00");
    }

    #[test]
    fn test_empty_or_garbage_is_placeholder() {
        assert_eq!(format_date_only(""), "-");
        assert_eq!(format_date_only("   "), "-");
        assert_eq!(format_date_time("yesterday"), "-");
    }

    #[test]
    fn test_file_size_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(format_file_size(10 * 1024 * 1024 + 512 * 1024), "10.5 MB");
    }
}
