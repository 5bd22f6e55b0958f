//! Display helpers for hashes, ids and timestamps.

use chrono::DateTime;
use chrono::Utc;

/// `0x1234...cdef`: first and last four characters. Strings of ten characters
/// or fewer are returned unchanged.
pub fn short_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 10 {
        return hash.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// `MM/DD/YYYY h:mm AM`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%m/%d/%Y %-I:%M %p").to_string()
}

/// `h:mm`, used on chart axes.
pub fn format_clock(ts: &DateTime<Utc>) -> String {
    ts.format("%-I:%M").to_string()
}

/// "5 minutes ago" style age of `ts` relative to `now`.
pub fn relative_time(ts: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - *ts).num_seconds();
    if secs < 0 {
        return "in the future".to_string();
    }
    if secs < 45 {
        return "a few seconds ago".to_string();
    }
    let (n, unit) = match secs {
        s if s < 3_600 => ((s + 30) / 60, "minute"),
        s if s < 86_400 => ((s + 1_800) / 3_600, "hour"),
        s if s < 2_592_000 => ((s + 43_200) / 86_400, "day"),
        s if s < 31_536_000 => ((s + 1_296_000) / 2_592_000, "month"),
        s => ((s + 15_768_000) / 31_536_000, "year"),
    };
    match n {
        1 if unit == "hour" => "an hour ago".to_string(),
        1 => format!("a {unit} ago"),
        n => format!("{n} {unit}s ago"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn short_hash_keeps_ends() {
        assert_eq!(short_hash("0x1234567890abcdef"), "0x12...cdef");
        assert_eq!(short_hash("abc"), "abc");
        assert_eq!(short_hash(""), "");
    }

    #[test]
    fn timestamp_uses_12_hour_clock() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "03/07/2024 3:04 PM");
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "12/31/2024 12:30 AM");
        assert_eq!(format_clock(&ts), "12:30");
    }

    #[test]
    fn relative_time_rounds_to_units() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(relative_time(&(now - Duration::seconds(10)), now), "a few seconds ago");
        assert_eq!(relative_time(&(now - Duration::minutes(5)), now), "5 minutes ago");
        assert_eq!(relative_time(&(now - Duration::minutes(61)), now), "an hour ago");
        assert_eq!(relative_time(&(now - Duration::hours(3)), now), "3 hours ago");
        assert_eq!(relative_time(&(now - Duration::days(2)), now), "2 days ago");
    }
}
