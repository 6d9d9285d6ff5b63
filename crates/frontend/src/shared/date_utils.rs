//! Date helpers for `<input type="date">` values and table cells

use chrono::NaiveDate;

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Value format of `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses the value of `<input type="date">`; blank or malformed gives `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(to_input_value(date), "2025-01-03");
        assert_eq!(parse_input_date(" 2025-01-03 "), Some(date));
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
