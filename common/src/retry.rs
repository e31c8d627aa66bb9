//! Bounded retry policy
//!
//! Attempts run strictly one after another; each completes before the next
//! starts. The sleep between attempts is injected so the WASM side can use
//! a timer future and tests can record delays instead of waiting.

use std::future::Future;
use std::time::Duration;

use crate::error::AnalysisError;

/// A fixed-count, fixed-delay retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    /// Three attempts, two seconds apart.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Run `op` until it succeeds, fails terminally, or attempts are
    /// exhausted. The final error is the one returned by the last attempt;
    /// no sleep follows it. Non-retryable errors end the loop immediately.
    ///
    /// `op` receives the 1-based attempt number.
    pub async fn run<T, Op, Fut, Sl, SlFut>(&self, mut op: Op, sleep: Sl) -> Result<T, AnalysisError>
    where
        Op: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, AnalysisError>>,
        Sl: Fn(Duration) -> SlFut,
        SlFut: Future<Output = ()>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) if attempt >= self.max_attempts => return Err(err),
                Err(_) => {
                    sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn policy() -> RetryPolicy {
        RetryPolicy::default()
    }

    /// Sleep recorder: appends each requested delay instead of waiting.
    fn recording_sleep(log: &RefCell<Vec<Duration>>) -> impl Fn(Duration) -> std::future::Ready<()> + '_ {
        move |d| {
            log.borrow_mut().push(d);
            std::future::ready(())
        }
    }

    #[test]
    fn test_default_policy() {
        let p = policy();
        assert_eq!(p.max_attempts, 3);
        assert_eq!(p.delay, Duration::from_secs(2));
    }

    #[test]
    fn test_success_first_attempt_no_sleep() {
        let sleeps = RefCell::new(Vec::new());
        let result = block_on(policy().run(|_| std::future::ready(Ok(7)), recording_sleep(&sleeps)));
        assert_eq!(result, Ok(7));
        assert!(sleeps.borrow().is_empty());
    }

    #[test]
    fn test_success_on_second_attempt_stops_retrying() {
        let sleeps = RefCell::new(Vec::new());
        let calls = RefCell::new(0u32);
        let result = block_on(policy().run(
            |attempt| {
                *calls.borrow_mut() += 1;
                if attempt < 2 {
                    std::future::ready(Err(AnalysisError::ServerError))
                } else {
                    std::future::ready(Ok("Glioma".to_string()))
                }
            },
            recording_sleep(&sleeps),
        ));
        assert_eq!(result, Ok("Glioma".to_string()));
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(*sleeps.borrow(), vec![Duration::from_secs(2)]);
    }

    #[test]
    fn test_exhaustion_returns_last_error() {
        let sleeps = RefCell::new(Vec::new());
        let calls = RefCell::new(0u32);
        let result: Result<(), _> = block_on(policy().run(
            |_| {
                *calls.borrow_mut() += 1;
                std::future::ready(Err(AnalysisError::ServiceNotFound))
            },
            recording_sleep(&sleeps),
        ));
        assert_eq!(result, Err(AnalysisError::ServiceNotFound));
        // three calls, a delay between consecutive attempts only
        assert_eq!(*calls.borrow(), 3);
        assert_eq!(
            *sleeps.borrow(),
            vec![Duration::from_secs(2), Duration::from_secs(2)]
        );
    }

    #[test]
    fn test_terminal_error_short_circuits() {
        let calls = RefCell::new(0u32);
        let sleeps = RefCell::new(Vec::new());
        let result: Result<(), _> = block_on(policy().run(
            |_| {
                *calls.borrow_mut() += 1;
                std::future::ready(Err(AnalysisError::EmptyPayload))
            },
            recording_sleep(&sleeps),
        ));
        assert_eq!(result, Err(AnalysisError::EmptyPayload));
        assert_eq!(*calls.borrow(), 1);
        assert!(sleeps.borrow().is_empty());
    }

    #[test]
    fn test_attempt_numbers_are_one_based() {
        let seen = RefCell::new(Vec::new());
        let _: Result<(), _> = block_on(policy().run(
            |attempt| {
                seen.borrow_mut().push(attempt);
                std::future::ready(Err(AnalysisError::Connection))
            },
            |_| std::future::ready(()),
        ));
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }
}
