//! Configuration constants and input validation for the deadline calculator.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{PrazoError, Result};

/// Date format used for all textual input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Parse a date string in YYYY-MM-DD format.
///
/// Future dates are accepted: deadline computation is inherently
/// forward-looking.
///
/// # Arguments
/// * `date_str` - Date string to parse
///
/// # Returns
/// * `Ok(NaiveDate)` if the format and the calendar date are valid
/// * `Err(PrazoError::InvalidDate)` otherwise
///
/// # Examples
/// ```
/// use direito_prazos::config::parse_date;
///
/// assert!(parse_date("2024-03-01").is_ok());
/// assert!(parse_date("01/03/2024").is_err());
/// assert!(parse_date("2024-13-01").is_err()); // Invalid month
/// ```
pub fn parse_date(date_str: &str) -> Result<chrono::NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(PrazoError::InvalidDate(date_str.to_string()));
    }

    chrono::NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| PrazoError::InvalidDate(date_str.to_string()))
}

/// Validate a day count before computation.
///
/// # Examples
/// ```
/// use direito_prazos::config::validate_day_count;
///
/// assert!(validate_day_count(15).is_ok());
/// assert!(validate_day_count(0).is_err());
/// assert!(validate_day_count(-3).is_err());
/// ```
pub fn validate_day_count(day_count: i64) -> Result<u32> {
    if day_count < 1 {
        return Err(PrazoError::InvalidDayCount(day_count));
    }
    u32::try_from(day_count).map_err(|_| PrazoError::InvalidDayCount(day_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert!(parse_date("2024-03-01").is_ok());
        assert!(parse_date("2000-06-15").is_ok());
        assert!(parse_date("2024-12-31").is_ok());
    }

    #[test]
    fn test_parse_date_accepts_future() {
        // Deadlines land in the future by definition
        assert!(parse_date("2099-01-01").is_ok());
    }

    #[test]
    fn test_parse_date_invalid_format() {
        assert!(parse_date("").is_err());
        assert!(parse_date("2024/03/01").is_err());
        assert!(parse_date("01-03-2024").is_err());
        assert!(parse_date("2024-3-1").is_err());
    }

    #[test]
    fn test_parse_date_invalid_date() {
        assert!(parse_date("2024-13-01").is_err()); // Invalid month
        assert!(parse_date("2024-02-30").is_err()); // Invalid day
        assert!(parse_date("2024-00-01").is_err()); // Zero month
    }

    #[test]
    fn test_validate_day_count() {
        assert_eq!(validate_day_count(1).ok(), Some(1));
        assert_eq!(validate_day_count(15).ok(), Some(15));
        assert!(validate_day_count(0).is_err());
        assert!(validate_day_count(-1).is_err());
    }
}
