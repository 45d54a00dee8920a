//! Direito Estrutura - Structural parser and QA validator for scraped
//! Brazilian legislation text.
//!
//! Scraped statute pages are noisy: articles get duplicated by re-scraping,
//! sections go missing, and boilerplate (header, ementa, enacting formula,
//! signature block) is the only evidence that a page really is the statute
//! it claims to be. This crate extracts the article sequence from raw text
//! and produces an advisory QA report for a human reviewer.
//!
//! # Example
//!
//! ```
//! use direito_estrutura::articles::extract_articles;
//!
//! let articles = extract_articles("Art. 1º texto A. Art. 2º texto B.");
//! assert_eq!(articles.len(), 2);
//! assert_eq!(articles[0].number, "1");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`text`]: NFC normalization, whitespace collapsing, HTML stripping
//! - [`articles`]: Article extraction and sequence analysis
//! - [`validate`]: Structural checks, scoring, and the QA report
//! - [`fallback`]: Ordered-fallback execution over candidate lists
//! - [`http`]: Source downloading with mirror fallback
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod articles;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod text;
pub mod validate;

// Re-export commonly used items
pub use articles::{extract_articles, find_duplicates, find_gaps, Article};
pub use error::{EstruturaError, Result};
pub use validate::{validate_document, Check, CheckStatus, ValidationReport};
