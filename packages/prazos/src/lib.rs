//! Direito Prazos - Brazilian procedural deadline calculator.
//!
//! This crate computes procedural deadlines (prazos processuais) from a
//! start date, a day count, and a counting regime, producing both the final
//! date and a step-by-step derivation suitable for display to the user.
//!
//! # Example
//!
//! ```
//! use direito_prazos::config::parse_date;
//! use direito_prazos::deadline::{compute_deadline, Regime};
//!
//! let start = parse_date("2024-03-01").unwrap();
//! let deadline = compute_deadline(start, 15, Regime::BusinessDays).unwrap();
//! assert_eq!(deadline.final_date.to_string(), "2024-03-22");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Input parsing and validation
//! - [`calendar`]: National holidays and business-day predicates
//! - [`deadline`]: Deadline computation
//! - [`trace`]: Derivation tracing
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod calendar;
pub mod cli;
pub mod config;
pub mod deadline;
pub mod error;
pub mod trace;

// Re-export commonly used items
pub use calendar::{is_business_day, is_holiday};
pub use config::parse_date;
pub use deadline::{compute_deadline, compute_final_date, Deadline, Regime};
pub use error::{PrazoError, Result};
pub use trace::{Step, StepKind};
