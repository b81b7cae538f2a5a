//! Fixed-delay retry policy shared by every remote fetch.
//!
//! Every endpoint goes through [`RetryPolicy::run`] so provinces,
//! regencies, districts, and villages all get the same attempt count and
//! spacing.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Attempts made per remote fetch, including the first.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Pause between consecutive attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// How many times an operation is tried and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Returned when every attempt failed.
#[derive(Debug)]
pub struct Exhausted<E> {
    /// Number of attempts made.
    pub attempts: u32,
    /// Error from the final attempt.
    pub last_error: E,
}

impl RetryPolicy {
    /// Creates a policy. An attempt count of zero is treated as one.
    #[must_use]
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            delay,
        }
    }

    /// Total attempts, including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `operation` until it succeeds or the attempts run out.
    ///
    /// Each failure is logged at `warn` with `label` and the attempt
    /// number. No delay follows the final attempt.
    ///
    /// # Errors
    ///
    /// Returns [`Exhausted`] holding the last error once all attempts
    /// have failed.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, Exhausted<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!(
                        "{label}: attempt {attempt}/{} failed: {e}",
                        self.max_attempts
                    );

                    if attempt >= self.max_attempts {
                        return Err(Exhausted {
                            attempts: attempt,
                            last_error: e,
                        });
                    }

                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn quick(attempts: u32) -> RetryPolicy {
        RetryPolicy::new(attempts, Duration::from_millis(1))
    }

    #[test]
    fn default_is_three_attempts_one_second_apart() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_secs(1));
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts(), 1);
    }

    #[tokio::test]
    async fn returns_first_success_without_retrying() {
        let calls = Cell::new(0);
        let result: Result<u32, Exhausted<String>> = quick(3)
            .run("ok", || {
                calls.set(calls.get() + 1);
                async { Ok(7) }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failure() {
        let calls = Cell::new(0);
        let result = quick(3)
            .run("flaky", || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n < 3 {
                        Err(format!("boom {n}"))
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn reports_last_error_when_exhausted() {
        let calls = Cell::new(0);
        let result: Result<(), _> = quick(3)
            .run("down", || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move { Err(format!("failure {n}")) }
            })
            .await;

        let exhausted = result.unwrap_err();
        assert_eq!(exhausted.attempts, 3);
        assert_eq!(exhausted.last_error, "failure 3");
        assert_eq!(calls.get(), 3);
    }
}
