//! Ordered-fallback execution over a list of candidates.
//!
//! Several callers need the same shape of loop: try candidates in order
//! (mirror URLs, API credentials), move to the next one on a retryable
//! failure, abort immediately on a fatal one, and return the first success.
//! This module provides that loop once, parameterized by a classifier,
//! instead of duplicating it at every call site. There is no backoff and no
//! persisted failure state; exhaustion surfaces the last error.

/// How a failure should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Move on to the next candidate.
    Retryable,

    /// Stop immediately; later candidates would fail the same way.
    Fatal,
}

/// Failure modes of [`run_with_fallback`].
#[derive(Debug)]
pub enum FallbackFailure<E> {
    /// A candidate failed with an error the classifier deemed fatal.
    Fatal(E),

    /// Every candidate failed with a retryable error.
    Exhausted {
        /// Number of candidates attempted.
        attempts: usize,
        /// The error from the last candidate.
        last: E,
    },

    /// The candidate list was empty.
    NoCandidates,
}

/// Try `op` against each candidate in order.
///
/// The first `Ok` is returned immediately. On `Err`, `classify` decides
/// whether to continue with the next candidate or abort.
pub fn run_with_fallback<C, T, E>(
    candidates: &[C],
    mut op: impl FnMut(&C) -> Result<T, E>,
    classify: impl Fn(&E) -> Disposition,
) -> Result<T, FallbackFailure<E>>
where
    E: std::fmt::Display,
{
    let mut last_error: Option<E> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        match op(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => match classify(&e) {
                Disposition::Fatal => return Err(FallbackFailure::Fatal(e)),
                Disposition::Retryable => {
                    tracing::warn!(
                        candidate = index + 1,
                        total = candidates.len(),
                        error = %e,
                        "Candidate failed, trying next"
                    );
                    last_error = Some(e);
                }
            },
        }
    }

    match last_error {
        Some(last) => Err(FallbackFailure::Exhausted {
            attempts: candidates.len(),
            last,
        }),
        None => Err(FallbackFailure::NoCandidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Soft(&'static str),
        Hard(&'static str),
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Soft(m) | Self::Hard(m) => write!(f, "{m}"),
            }
        }
    }

    fn classify(e: &TestError) -> Disposition {
        match e {
            TestError::Soft(_) => Disposition::Retryable,
            TestError::Hard(_) => Disposition::Fatal,
        }
    }

    #[test]
    fn test_first_success_returns_immediately() {
        let candidates = [1, 2, 3];
        let mut calls = 0;
        let result = run_with_fallback(
            &candidates,
            |c| {
                calls += 1;
                Ok::<_, TestError>(*c * 10)
            },
            classify,
        );
        assert_eq!(result.ok(), Some(10));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_retryable_moves_to_next_candidate() {
        let candidates = ["a", "b", "c"];
        let result = run_with_fallback(
            &candidates,
            |c| {
                if *c == "c" {
                    Ok(*c)
                } else {
                    Err(TestError::Soft("quota"))
                }
            },
            classify,
        );
        assert_eq!(result.ok(), Some("c"));
    }

    #[test]
    fn test_fatal_aborts_immediately() {
        let candidates = [1, 2, 3];
        let mut calls = 0;
        let result: Result<i32, _> = run_with_fallback(
            &candidates,
            |_| {
                calls += 1;
                Err(TestError::Hard("forbidden"))
            },
            classify,
        );
        assert_eq!(calls, 1);
        assert!(matches!(result, Err(FallbackFailure::Fatal(_))));
    }

    #[test]
    fn test_exhaustion_reports_attempts_and_last_error() {
        let candidates = [1, 2, 3];
        let result: Result<i32, _> = run_with_fallback(
            &candidates,
            |c| {
                if *c == 3 {
                    Err(TestError::Soft("last"))
                } else {
                    Err(TestError::Soft("earlier"))
                }
            },
            classify,
        );
        match result {
            Err(FallbackFailure::Exhausted { attempts, last }) => {
                assert_eq!(attempts, 3);
                assert_eq!(last, TestError::Soft("last"));
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_candidate_list() {
        let candidates: [i32; 0] = [];
        let result: Result<i32, _> =
            run_with_fallback(&candidates, |_| Err(TestError::Soft("unreachable")), classify);
        assert!(matches!(result, Err(FallbackFailure::NoCandidates)));
    }
}
