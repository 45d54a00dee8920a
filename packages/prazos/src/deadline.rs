//! Deadline computation for Brazilian procedural time limits.
//!
//! Counting follows the procedural convention: the start date is day 0 and
//! is never counted; the count begins on the following calendar day. Under
//! the business-day regime (CPC/2015, art. 219) weekends and national
//! holidays are skipped both while locating the first countable day and
//! while counting, and a deadline may never fall on a non-working day.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::calendar::{is_business_day, non_business_reason};
use crate::config::validate_day_count;
use crate::error::{PrazoError, Result};
use crate::trace::{render_steps, Step, StepKind, TraceBuilder};

/// Counting regime for a procedural deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// Business days (dias úteis): weekends and national holidays are skipped.
    #[serde(rename = "DIAS_UTEIS")]
    BusinessDays,

    /// Calendar days (dias corridos): every day counts.
    #[serde(rename = "DIAS_CORRIDOS")]
    CalendarDays,
}

impl Regime {
    /// Get the string value for JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessDays => "DIAS_UTEIS",
            Self::CalendarDays => "DIAS_CORRIDOS",
        }
    }

    /// Parse a regime from user input.
    ///
    /// Accepts the forms used by the CLI and by stored user preferences.
    pub fn parse(text: &str) -> Result<Self> {
        match text.to_lowercase().as_str() {
            "uteis" | "úteis" | "dias_uteis" | "dias úteis" | "dias uteis" => {
                Ok(Self::BusinessDays)
            }
            "corridos" | "dias_corridos" | "dias corridos" => Ok(Self::CalendarDays),
            _ => Err(PrazoError::InvalidRegime(text.to_string())),
        }
    }
}

/// A computed deadline with its derivation.
#[derive(Debug, Clone, Serialize)]
pub struct Deadline {
    /// The start date (day 0, not counted).
    pub start_date: NaiveDate,

    /// Number of days in the time limit.
    pub day_count: u32,

    /// Counting regime used.
    pub regime: Regime,

    /// The final deadline date.
    pub final_date: NaiveDate,

    /// Step-by-step derivation.
    pub steps: Vec<Step>,
}

impl Deadline {
    /// Render the derivation as a human-readable multi-line string.
    #[must_use]
    pub fn render_trace(&self) -> String {
        render_steps(&self.steps)
    }
}

/// Compute a deadline with a full derivation trace.
///
/// # Arguments
/// * `start_date` - Day 0; counting begins on the following calendar day
/// * `day_count` - Length of the time limit; must be at least 1
/// * `regime` - Business-day or calendar-day counting
///
/// # Errors
/// * `PrazoError::InvalidDayCount` for non-positive counts
/// * `PrazoError::DateOutOfRange` if the computation would leave the
///   supported calendar range
pub fn compute_deadline(start_date: NaiveDate, day_count: i64, regime: Regime) -> Result<Deadline> {
    compute_with_builder(start_date, day_count, regime, TraceBuilder::new())
}

/// Compute only the final date, without building a trace.
pub fn compute_final_date(
    start_date: NaiveDate,
    day_count: i64,
    regime: Regime,
) -> Result<NaiveDate> {
    compute_with_builder(start_date, day_count, regime, TraceBuilder::disabled())
        .map(|d| d.final_date)
}

fn compute_with_builder(
    start_date: NaiveDate,
    day_count: i64,
    regime: Regime,
    mut trace: TraceBuilder,
) -> Result<Deadline> {
    let count = validate_day_count(day_count)?;

    trace.record(
        start_date,
        StepKind::Start,
        "termo inicial (dia 0, não contado)",
    );

    let mut current = next_day(start_date, day_count)?;
    let mut counted: u32 = 0;

    loop {
        let countable = match regime {
            Regime::BusinessDays => is_business_day(current),
            Regime::CalendarDays => true,
        };

        if countable {
            counted += 1;
            trace.record(current, StepKind::Counted, format!("dia {counted} de {count}"));
            if counted == count {
                break;
            }
        } else if let Some(reason) = non_business_reason(current) {
            trace.record(current, StepKind::Skipped, reason);
        }

        current = next_day(current, day_count)?;
    }

    // A deadline may not fall on a non-working day. Under the calendar-day
    // regime no roll is applied, matching how the consumer application
    // behaves even when the landing date is a holiday.
    if regime == Regime::BusinessDays {
        while !is_business_day(current) {
            if let Some(reason) = non_business_reason(current) {
                trace.record(current, StepKind::RolledForward, reason);
            }
            current = next_day(current, day_count)?;
        }
    }

    trace.record(current, StepKind::Final, "prazo final");

    tracing::debug!(
        start = %start_date,
        count,
        regime = regime.as_str(),
        final_date = %current,
        "deadline computed"
    );

    Ok(Deadline {
        start_date,
        day_count: count,
        regime,
        final_date: current,
        steps: trace.build(),
    })
}

fn next_day(date: NaiveDate, day_count: i64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or(PrazoError::DateOutOfRange(date, day_count))
}
