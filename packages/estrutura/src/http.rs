//! HTTP client for downloading statute pages from government portals.
//!
//! Pages are fetched through [`run_with_fallback`] over an ordered list of
//! source URLs (primary plus mirrors). Connection problems, timeouts, and
//! quota-ish statuses (404, 429, 5xx) move on to the next source; other
//! client errors abort, since every mirror would answer the same way.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::{validate_url, HTTP_TIMEOUT_SECS};
use crate::error::{EstruturaError, Result};
use crate::fallback::{run_with_fallback, Disposition, FallbackFailure};

/// User agent string identifying this validator.
const USER_AGENT: &str = concat!("direito-estrutura/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// One failed fetch attempt, for classification.
#[derive(Debug)]
enum FetchError {
    Request(reqwest::Error),
    Status { url: String, status: StatusCode },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(e) => write!(f, "{e}"),
            Self::Status { url, status } => write!(f, "{status} from {url}"),
        }
    }
}

fn classify(error: &FetchError) -> Disposition {
    match error {
        FetchError::Request(e) if e.is_connect() || e.is_timeout() => Disposition::Retryable,
        FetchError::Request(_) => Disposition::Fatal,
        FetchError::Status { status, .. } => {
            if status.is_server_error()
                || *status == StatusCode::NOT_FOUND
                || *status == StatusCode::TOO_MANY_REQUESTS
            {
                Disposition::Retryable
            } else {
                Disposition::Fatal
            }
        }
    }
}

/// Download the body of the first source URL that answers successfully.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `urls` - Ordered source list; the first entry is the primary source
///
/// # Returns
/// The raw response body (typically HTML) of the first successful source.
pub fn download_page(client: &Client, urls: &[String]) -> Result<String> {
    for url in urls {
        validate_url(url)?;
    }

    let result = run_with_fallback(
        urls,
        |url| {
            tracing::debug!(url = %url, "fetching source");
            let response = client.get(url).send().map_err(FetchError::Request)?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.clone(),
                    status,
                });
            }
            response.text().map_err(FetchError::Request)
        },
        classify,
    );

    match result {
        Ok(body) => Ok(body),
        Err(FallbackFailure::Fatal(FetchError::Request(e))) => Err(EstruturaError::Http(e)),
        Err(FallbackFailure::Fatal(FetchError::Status { url, status })) => {
            Err(EstruturaError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            })
        }
        Err(FallbackFailure::Exhausted { attempts, last }) => {
            Err(EstruturaError::SourcesExhausted {
                attempts,
                message: last.to_string(),
            })
        }
        Err(FallbackFailure::NoCandidates) => Err(EstruturaError::SourcesExhausted {
            attempts: 0,
            message: "no source URLs given".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        assert!(create_client().is_ok());
    }

    #[test]
    fn test_download_page_rejects_invalid_url() {
        #[allow(clippy::unwrap_used)]
        let client = create_client().unwrap();
        let result = download_page(&client, &["ftp://example.com".to_string()]);
        assert!(matches!(result, Err(EstruturaError::InvalidUrl(_))));
    }

    #[test]
    fn test_download_page_empty_list() {
        #[allow(clippy::unwrap_used)]
        let client = create_client().unwrap();
        let result = download_page(&client, &[]);
        assert!(matches!(
            result,
            Err(EstruturaError::SourcesExhausted { attempts: 0, .. })
        ));
    }

    fn status_error(code: u16) -> FetchError {
        #[allow(clippy::unwrap_used)]
        let status = StatusCode::from_u16(code).unwrap();
        FetchError::Status {
            url: "https://example.com".to_string(),
            status,
        }
    }

    #[test]
    fn test_classify_statuses() {
        for code in [404u16, 429, 500, 502, 503] {
            assert_eq!(
                classify(&status_error(code)),
                Disposition::Retryable,
                "status {code}"
            );
        }

        for code in [400u16, 401, 403, 410] {
            assert_eq!(classify(&status_error(code)), Disposition::Fatal, "status {code}");
        }
    }
}
