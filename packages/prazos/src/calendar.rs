//! Brazilian national holidays and business-day predicates.
//!
//! The holiday set covers the fixed-date national holidays established by
//! Law 662/1949 and later amendments (including Law 14.759/2023, which made
//! 20 November a national holiday). Movable feasts (Carnaval, Sexta-feira
//! Santa, Corpus Christi) and state or municipal holidays are outside the
//! static set.

use chrono::{Datelike, NaiveDate, Weekday};

/// A fixed-date national holiday (recurs every year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
}

/// Fixed-date national holidays.
pub const NATIONAL_HOLIDAYS: [Holiday; 9] = [
    Holiday { month: 1, day: 1, name: "Confraternização Universal" },
    Holiday { month: 4, day: 21, name: "Tiradentes" },
    Holiday { month: 5, day: 1, name: "Dia do Trabalho" },
    Holiday { month: 9, day: 7, name: "Independência do Brasil" },
    Holiday { month: 10, day: 12, name: "Nossa Senhora Aparecida" },
    Holiday { month: 11, day: 2, name: "Finados" },
    Holiday { month: 11, day: 15, name: "Proclamação da República" },
    Holiday { month: 11, day: 20, name: "Dia Nacional de Zumbi e da Consciência Negra" },
    Holiday { month: 12, day: 25, name: "Natal" },
];

/// Return the name of the national holiday falling on `date`, if any.
#[must_use]
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    NATIONAL_HOLIDAYS
        .iter()
        .find(|h| h.month == date.month() && h.day == date.day())
        .map(|h| h.name)
}

/// Check whether `date` is a national holiday.
#[must_use]
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_name(date).is_some()
}

/// Check whether `date` is a business day (not a weekend, not a holiday).
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !is_holiday(date)
}

/// Portuguese weekday name for display.
#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Describe why a date is not a business day, for trace output.
///
/// Returns `None` for business days.
#[must_use]
pub fn non_business_reason(date: NaiveDate) -> Option<String> {
    match date.weekday() {
        Weekday::Sat => Some("sábado".to_string()),
        Weekday::Sun => Some("domingo".to_string()),
        _ => holiday_name(date).map(|name| format!("feriado nacional ({name})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::unwrap_used)]
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_holiday_name() {
        assert_eq!(holiday_name(date(2024, 12, 25)), Some("Natal"));
        assert_eq!(holiday_name(date(2024, 4, 21)), Some("Tiradentes"));
        assert_eq!(holiday_name(date(2024, 3, 4)), None);
    }

    #[test]
    fn test_is_holiday_any_year() {
        // Fixed-date holidays recur every year
        assert!(is_holiday(date(1999, 9, 7)));
        assert!(is_holiday(date(2030, 11, 15)));
        assert!(!is_holiday(date(2024, 7, 10)));
    }

    #[test]
    fn test_is_business_day_weekend() {
        assert!(!is_business_day(date(2024, 3, 2))); // Saturday
        assert!(!is_business_day(date(2024, 3, 3))); // Sunday
        assert!(is_business_day(date(2024, 3, 4))); // Monday
    }

    #[test]
    fn test_is_business_day_holiday() {
        assert!(!is_business_day(date(2024, 5, 1))); // Dia do Trabalho (Wednesday)
        assert!(is_business_day(date(2024, 5, 2)));
    }

    #[test]
    fn test_non_business_reason() {
        assert_eq!(
            non_business_reason(date(2024, 3, 2)),
            Some("sábado".to_string())
        );
        assert_eq!(
            non_business_reason(date(2024, 3, 3)),
            Some("domingo".to_string())
        );
        assert_eq!(
            non_business_reason(date(2024, 12, 25)),
            Some("feriado nacional (Natal)".to_string())
        );
        assert_eq!(non_business_reason(date(2024, 3, 4)), None);
    }
}
