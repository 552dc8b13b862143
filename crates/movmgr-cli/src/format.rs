//! Display formatting for movie detail output.

use chrono::NaiveDate;

/// TMDB date format (YYYY-MM-DD).
const TMDB_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a whole-dollar USD amount with thousands grouping.
///
/// TMDB reports unknown budget/revenue as zero; that renders as "N/A"
/// rather than "$0".
#[must_use]
pub fn format_currency(amount: u64) -> String {
    if amount == 0 {
        return String::from("N/A");
    }
    format!("${}", group_thousands(amount))
}

/// Inserts thousands separators into a decimal rendering.
#[allow(clippy::arithmetic_side_effects)]
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a TMDB date as long-form US English ("July 15, 2010").
///
/// Returns the input unchanged when it does not parse as a date.
#[must_use]
pub fn format_long_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, TMDB_DATE_FORMAT).map_or_else(
        |_| String::from(date),
        |d| d.format("%B %-d, %Y").to_string(),
    )
}

/// Extracts the release year from a TMDB date, or "-" when absent.
#[must_use]
pub fn release_year(date: Option<&str>) -> String {
    date.and_then(|d| NaiveDate::parse_from_str(d, TMDB_DATE_FORMAT).ok())
        .map_or_else(|| String::from("-"), |d| d.format("%Y").to_string())
}

/// Section heading for the release date: "Released" once the date has
/// passed (inclusive), "Release Date" for future or unknown dates.
#[must_use]
pub fn release_label(date: Option<&str>, today: NaiveDate) -> &'static str {
    match date.and_then(|d| NaiveDate::parse_from_str(d, TMDB_DATE_FORMAT).ok()) {
        Some(release) if release <= today => "Released",
        _ => "Release Date",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        // Arrange & Act & Assert
        assert_eq!(format_currency(160_000_000), "$160,000,000");
        assert_eq!(format_currency(825_532_764), "$825,532,764");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1), "$1");
    }

    #[test]
    fn test_format_currency_zero_is_not_available() {
        // Arrange & Act & Assert
        assert_eq!(format_currency(0), "N/A");
    }

    #[test]
    fn test_format_long_date() {
        // Arrange & Act & Assert
        assert_eq!(format_long_date("2010-07-15"), "July 15, 2010");
        assert_eq!(format_long_date("2024-06-01"), "June 1, 2024");
    }

    #[test]
    fn test_format_long_date_passes_through_garbage() {
        // Arrange & Act & Assert
        assert_eq!(format_long_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_release_year() {
        // Arrange & Act & Assert
        assert_eq!(release_year(Some("2010-07-15")), "2010");
        assert_eq!(release_year(None), "-");
        assert_eq!(release_year(Some("")), "-");
    }

    #[test]
    fn test_release_label_past_date() {
        // Arrange
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        // Act & Assert
        assert_eq!(release_label(Some("2010-07-15"), today), "Released");
    }

    #[test]
    fn test_release_label_today_counts_as_released() {
        // Arrange
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        // Act & Assert
        assert_eq!(release_label(Some("2024-05-01"), today), "Released");
    }

    #[test]
    fn test_release_label_future_date() {
        // Arrange
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        // Act & Assert
        assert_eq!(release_label(Some("2024-12-25"), today), "Release Date");
    }

    #[test]
    fn test_release_label_unknown_date() {
        // Arrange
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        // Act & Assert
        assert_eq!(release_label(None, today), "Release Date");
    }
}
