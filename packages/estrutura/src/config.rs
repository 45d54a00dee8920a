//! Configuration constants and input validation for the validator.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{EstruturaError, Result};

/// HTTP timeout in seconds.
///
/// Government portals can be slow; 30 seconds accommodates large statute
/// pages on congested connections.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Text wrap width for CLI article display.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Minimum score (percentage) for a document to be accepted.
pub const MIN_ACCEPT_SCORE: f64 = 70.0;

/// URL pattern: http or https scheme with a non-empty host.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+").expect("valid regex"));

/// Validate a source URL.
///
/// # Examples
/// ```
/// use direito_estrutura::config::validate_url;
///
/// assert!(validate_url("https://www.planalto.gov.br/ccivil_03/leis/l8078.htm").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(EstruturaError::InvalidUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_valid() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://www.planalto.gov.br/ccivil_03/leis/l8078.htm").is_ok());
        assert!(validate_url("https://localhost:8080/lei").is_ok());
    }

    #[test]
    fn test_validate_url_invalid() {
        assert!(validate_url("").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("www.planalto.gov.br").is_err());
        assert!(validate_url("https://").is_err());
    }
}
