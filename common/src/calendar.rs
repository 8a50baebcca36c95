use chrono::{Datelike, NaiveDate};

use crate::error::ParseError;

/// Parse an ISO calendar date (`YYYY-MM-DD`), as produced by a date input.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ParseError::Date(s.to_string()))
}

/// Parse a month (`YYYY-MM`) into its first day. Longer ISO strings are cut to
/// the month, the way a month picker reports them.
pub fn parse_month(s: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = s.trim();
    let month = trimmed.get(..7).unwrap_or(trimmed);
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map_err(|_| ParseError::Month(s.to_string()))
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Display form used on batch cards, e.g. "Oct 12, 2025".
pub fn format_long(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Today's date in the local timezone.
#[cfg(feature = "std")]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-10-12"), Ok(NaiveDate::from_ymd_opt(2025, 10, 12).unwrap()));
        assert_eq!(parse_date("12/10/2025"), Err(ParseError::Date("12/10/2025".into())));
    }

    #[test]
    fn test_parse_month() {
        let march = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(parse_month("2026-03"), Ok(march));
        assert_eq!(parse_month("2026-03-17"), Ok(march));
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("soon").is_err());
        assert_eq!(format_month(march), "2026-03");
    }

    #[test]
    fn test_month_start_and_long_format() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
        assert_eq!(month_start(d), NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(format_long(d), "Oct 12, 2025");
    }
}
