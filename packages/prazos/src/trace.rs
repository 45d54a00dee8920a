//! Derivation tracing for deadline computation.
//!
//! Every computed deadline carries an ordered list of steps documenting how
//! the final date was reached. This is useful for:
//!
//! - **Audit trails**: documenting exactly how a deadline was derived
//! - **Debugging**: understanding why a particular date was produced
//! - **Explainability**: showing the derivation to the end user
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use direito_prazos::trace::{StepKind, TraceBuilder};
//!
//! let mut builder = TraceBuilder::new();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! builder.record(date, StepKind::Start, "termo inicial");
//! let steps = builder.build();
//! assert_eq!(steps.len(), 1);
//! ```

use chrono::NaiveDate;
use serde::Serialize;

/// Kind of a single derivation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// The start date (day 0, not counted).
    Start,

    /// A calendar day counted towards the deadline.
    Counted,

    /// A calendar day skipped (weekend or holiday) under the business-day regime.
    Skipped,

    /// The computed date fell on a non-business day and was rolled forward.
    RolledForward,

    /// The final deadline date.
    Final,
}

impl StepKind {
    /// Short label for rendering.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "início",
            Self::Counted => "contado",
            Self::Skipped => "pulado",
            Self::RolledForward => "prorrogado",
            Self::Final => "final",
        }
    }
}

/// A single step in the derivation of a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The calendar date this step refers to.
    pub date: NaiveDate,

    /// What happened on this date.
    pub kind: StepKind,

    /// Human-readable note (e.g., "dia 3 de 15", "sábado").
    pub note: String,
}

impl Step {
    /// Create a new step.
    pub fn new(date: NaiveDate, kind: StepKind, note: impl Into<String>) -> Self {
        Self {
            date,
            kind,
            note: note.into(),
        }
    }

    /// Render this step as a single line.
    ///
    /// Produces output like:
    /// ```text
    /// 2024-03-04  contado     dia 1 de 15
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}  {:<11} {}", self.date.format("%Y-%m-%d"), self.kind.as_str(), self.note)
    }
}

/// Render a full derivation as a multi-line string.
#[must_use]
pub fn render_steps(steps: &[Step]) -> String {
    steps.iter().map(Step::render).collect::<Vec<_>>().join("\n")
}

/// Builder collecting derivation steps during computation.
///
/// Can be created disabled, in which case all recording calls are no-ops.
/// This keeps long computations cheap when the caller does not want a trace.
#[derive(Debug)]
pub struct TraceBuilder {
    steps: Vec<Step>,
    enabled: bool,
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceBuilder {
    /// Create a new builder with tracing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            enabled: true,
        }
    }

    /// Create a new builder with tracing disabled (no-op).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            steps: Vec::new(),
            enabled: false,
        }
    }

    /// Check if tracing is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a step.
    pub fn record(&mut self, date: NaiveDate, kind: StepKind, note: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.steps.push(Step::new(date, kind, note));
    }

    /// Number of steps recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no steps were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Build the final step list, consuming the builder.
    #[must_use]
    pub fn build(self) -> Vec<Step> {
        self.steps
    }
}
