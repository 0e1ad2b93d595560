//! The bounded polling wait every readiness check goes through.

use anyhow::Result;
use std::{
    error::Error,
    fmt::{Display, Formatter},
    future::Future,
    time::Duration,
};
use tokio::time::{sleep, Instant};

/// Ceiling for an ordinary readiness check.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Ceiling for the per-item cart controls.
pub const CONTROL_TIMEOUT: Duration = Duration::from_secs(5);

/// Post-login ceiling; the performance-glitch account takes far longer to
/// land on the listing than a regular page settle.
pub const LOGIN_SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Interval between condition probes.
pub const DEFAULT_POLL: Duration = Duration::from_millis(100);

/// Repeatedly evaluates a condition until it yields or the timeout elapses.
#[derive(Debug, Copy, Clone)]
pub struct Wait {
    timeout: Duration,
    poll: Duration,
}

impl Default for Wait {
    fn default() -> Self {
        Wait {
            timeout: DEFAULT_TIMEOUT,
            poll: DEFAULT_POLL,
        }
    }
}

impl Wait {
    pub fn new() -> Self {
        Wait::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Wait {
            timeout,
            ..Wait::default()
        }
    }

    pub fn poll(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    /// Polls `probe` until it yields a value or the timeout elapses.
    ///
    /// `Ok(None)` means "not yet" — an element missing from the DOM belongs
    /// here, since it may still appear. Any `Err` is a fault outside the
    /// condition (closed session, protocol error) and aborts the wait at
    /// once. On elapse the wait fails with [`NotReady`] naming `what`.
    pub async fn until<T, F, Fut>(self, what: &str, mut probe: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(found) = probe().await? {
                return Ok(found);
            }
            if Instant::now() >= deadline {
                return Err(NotReady {
                    what: what.to_string(),
                    timeout: self.timeout,
                }
                .into());
            }
            sleep(self.poll).await;
        }
    }
}

/// A readiness condition that did not hold within its bounded wait.
#[derive(Debug)]
pub struct NotReady {
    what: String,
    timeout: Duration,
}

impl Display for NotReady {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "timed out after {:?} waiting for {}",
            self.timeout, self.what
        )
    }
}

impl Error for NotReady {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn returns_once_the_condition_holds() {
        let probes = Cell::new(0u32);
        let value = Wait::with_timeout(Duration::from_secs(1))
            .poll(Duration::from_millis(1))
            .until("the third probe", || {
                let probes = &probes;
                async move {
                    probes.set(probes.get() + 1);
                    if probes.get() >= 3 {
                        Ok(Some(42))
                    } else {
                        Ok(None)
                    }
                }
            })
            .await
            .unwrap();
        assert_eq!(value, 42);
        assert_eq!(probes.get(), 3);
    }

    #[tokio::test]
    async fn elapsing_yields_not_ready() {
        let result: Result<()> = Wait::with_timeout(Duration::from_millis(20))
            .poll(Duration::from_millis(1))
            .until("a condition that never holds", || async { Ok(None) })
            .await;
        let err = result.unwrap_err();
        assert!(err.is::<NotReady>());
        assert!(err.to_string().contains("a condition that never holds"));
    }

    #[tokio::test]
    async fn probe_faults_abort_immediately() {
        let probes = Cell::new(0u32);
        let result: Result<()> = Wait::with_timeout(Duration::from_secs(5))
            .poll(Duration::from_millis(1))
            .until("a faulting probe", || {
                let probes = &probes;
                async move {
                    probes.set(probes.get() + 1);
                    Err(anyhow::anyhow!("session gone"))
                }
            })
            .await;
        let err = result.unwrap_err();
        assert!(!err.is::<NotReady>());
        assert_eq!(probes.get(), 1);
    }

    #[tokio::test]
    async fn probes_at_least_once_even_with_a_zero_timeout() {
        let probes = Cell::new(0u32);
        let value = Wait::with_timeout(Duration::from_millis(0))
            .until("an immediate hit", || {
                let probes = &probes;
                async move {
                    probes.set(probes.get() + 1);
                    Ok(Some("hit"))
                }
            })
            .await
            .unwrap();
        assert_eq!(value, "hit");
        assert_eq!(probes.get(), 1);
    }
}
