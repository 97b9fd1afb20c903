//! Bounded condition polling.
//!
//! The dashboard's chart libraries render asynchronously and expose no
//! completion signal, so checks poll their own visibility assertions under a
//! deadline instead of sleeping for a fixed wall-clock delay.

use crate::error::{BrowserError, Result};
use std::future::Future;
use std::time::{Duration, Instant};
use voxcheck_core::WaitSettings;

/// Timeout and poll interval for a bounded wait.
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl WaitConfig {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl From<&WaitSettings> for WaitConfig {
    fn from(settings: &WaitSettings) -> Self {
        Self {
            timeout: Duration::from_millis(settings.render_timeout_ms),
            poll_interval: Duration::from_millis(settings.poll_interval_ms.max(1)),
        }
    }
}

/// Poll `probe` until it reports true or the timeout elapses.
///
/// The probe runs at least once even with a zero timeout. `what` names the
/// awaited condition in the timeout error.
pub async fn wait_until<F, Fut>(config: &WaitConfig, what: &str, mut probe: F) -> Result<()>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = Result<bool>> + Send,
{
    let deadline = Instant::now() + config.timeout;

    loop {
        if probe().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(BrowserError::Timeout(format!(
                "{} did not hold within {:?}",
                what, config.timeout
            )));
        }
        tokio::time::sleep(config.poll_interval).await;
    }
}
