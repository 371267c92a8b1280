//! Shared utility functions for soil moisture crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Display format for dates on chart axes and in summaries: "YYYY-MM-DD"
    pub const DISPLAY_FORMAT: &str = "%Y-%m-%d";

    /// Calendar-date layouts tried in order by [`parse_date_lenient`].
    pub const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y%m%d",
        "%m/%d/%Y",
        "%d.%m.%Y",
        "%d %b %Y",
        "%b %d %Y",
        "%b %d, %Y",
        "%B %d, %Y",
        "%d %B %Y",
    ];

    /// Date-time layouts; only the date part is kept.
    pub const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DISPLAY_FORMAT).to_string()
    }

    /// Parse a date written in any of the common layouts.
    ///
    /// Returns `None` instead of an error so callers can coerce bad cells
    /// to a missing value.
    pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        #[test]
        fn test_parse_common_layouts() {
            let expected = ymd(2023, 6, 15);
            for s in [
                "2023-06-15",
                "2023/06/15",
                "20230615",
                "06/15/2023",
                "15.06.2023",
                "15 Jun 2023",
                "Jun 15 2023",
                "Jun 15, 2023",
                "June 15, 2023",
                "15 June 2023",
            ] {
                assert_eq!(parse_date_lenient(s), Some(expected), "layout {s}");
            }
        }

        #[test]
        fn test_parse_datetimes_keep_date() {
            let expected = ymd(2023, 6, 15);
            assert_eq!(parse_date_lenient("2023-06-15 23:59:59"), Some(expected));
            assert_eq!(parse_date_lenient("2023-06-15T08:00:00"), Some(expected));
            assert_eq!(parse_date_lenient("2023-06-15 08:30"), Some(expected));
            assert_eq!(
                parse_date_lenient("2023-06-15T08:00:00+02:00"),
                Some(expected)
            );
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert_eq!(parse_date_lenient(""), None);
            assert_eq!(parse_date_lenient("   "), None);
            assert_eq!(parse_date_lenient("not a date"), None);
            assert_eq!(parse_date_lenient("2023-13-45"), None);
        }

        #[test]
        fn test_parse_trims_whitespace() {
            assert_eq!(parse_date_lenient("  2022-01-05 "), Some(ymd(2022, 1, 5)));
        }

        #[test]
        fn test_format_date() {
            assert_eq!(format_date(&ymd(2023, 6, 5)), "2023-06-05");
        }
    }
}
