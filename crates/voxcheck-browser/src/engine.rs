use crate::error::{BrowserError, Result};
use crate::page::PageHandle;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::Duration;
use voxcheck_core::BrowserSettings;

/// Browser automation engine.
///
/// Owns the Chromium process; dropping (or calling [`close`](Self::close))
/// tears it down, so a per-test engine cannot leak across checks.
pub struct BrowserEngine {
    browser: Browser,
}

impl BrowserEngine {
    /// Launch a browser with default settings.
    pub async fn launch() -> Result<Self> {
        Self::with_settings(&BrowserSettings::default()).await
    }

    /// Launch a browser with specific settings.
    pub async fn with_settings(settings: &BrowserSettings) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(settings.window_width, settings.window_height)
            .request_timeout(Duration::from_secs(settings.navigation_timeout_secs));

        if !settings.headless {
            builder = builder.with_head();
        }

        let config = builder.build().map_err(BrowserError::ChromiumError)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;

        // Drive the CDP connection until the browser goes away
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        tracing::debug!(
            headless = settings.headless,
            width = settings.window_width,
            height = settings.window_height,
            "browser launched"
        );

        Ok(Self { browser })
    }

    /// Open a new blank tab with console capture attached.
    pub async fn new_page(&self) -> Result<PageHandle> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        PageHandle::attach(page).await
    }

    /// Shut the browser down.
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }
}
