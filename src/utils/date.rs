use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// "Friday, March 1, 2024"
pub fn format_long(d: &NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}
