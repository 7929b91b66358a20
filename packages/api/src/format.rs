//! Display helpers for amounts, dates and avatars.

use chrono::{DateTime, NaiveDate};

/// Shown when a date is missing.
pub const MISSING_DATE: &str = "—";

/// Rupee amount with Indian digit grouping: `₹1,23,456`. Up to three
/// fraction digits are kept, trailing zeros dropped.
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.3}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::from("₹");
    if amount < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Last three digits, then groups of two: `1234567` → `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `2025-08-15` or an RFC 3339 timestamp as `15 Aug 2025`. Missing dates
/// render as [`MISSING_DATE`]; unparseable ones are returned unchanged.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return MISSING_DATE.to_string();
    };
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match parsed {
        Ok(day) => day.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Up to two uppercase initials: `Rahul Sharma` → `RS`.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(1000.0), "₹1,000");
        assert_eq!(format_currency(123456.0), "₹1,23,456");
        assert_eq!(format_currency(12345678.0), "₹1,23,45,678");
        assert_eq!(format_currency(2950.5), "₹2,950.5");
        assert_eq!(format_currency(-45000.0), "₹-45,000");
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_date(Some("2025-08-15")), "15 Aug 2025");
        assert_eq!(format_date(Some("2025-01-05T10:30:00Z")), "05 Jan 2025");
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some("")), "—");
        assert_eq!(format_date(Some("soon")), "soon");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Rahul Sharma"), "RS");
        assert_eq!(initials("priya k mehta"), "PK");
        assert_eq!(initials("Admin"), "A");
        assert_eq!(initials(""), "");
    }
}
