//! Fixed-delay retry policy around the sink append call.

use std::thread;
use std::time::Duration;

/// Retry a fallible call a fixed number of times with a fixed pause
/// between attempts. No backoff, no jitter.
///
/// There is no idempotency key: an append that reached the sink but
/// lost its acknowledgement is attempted again and can land twice.
/// That limitation is inherited from the workflow this tool replaces
/// and is documented rather than papered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Run `op` until it succeeds or `max_attempts` calls have failed.
    /// Every error counts as one attempt; the last error is returned
    /// once the budget is spent.
    pub fn run<T, E>(&self, mut op: impl FnMut() -> Result<T, E>) -> Result<T, E> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match op() {
                Ok(v) => return Ok(v),
                Err(e) => {
                    if attempt >= self.max_attempts {
                        return Err(e);
                    }
                    thread::sleep(self.delay);
                }
            }
        }
    }
}
