//! Page handle wrapping a CDP page with DOM probes and console capture.

use crate::console::{ConsoleCapture, ConsoleMessage};
use crate::dom::{js_string, DomActions};
use crate::error::{BrowserError, Result};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::js_protocol::runtime::{EventConsoleApiCalled, EventExceptionThrown};
use chromiumoxide::Page;
use futures::StreamExt;
use serde::de::DeserializeOwned;

/// One browser tab, with console capture attached from creation.
///
/// DOM probes are JavaScript evaluations returning JSON, so a probe sees the
/// page exactly as the site's own scripts do.
pub struct PageHandle {
    page: Page,
    console: ConsoleCapture,
}

impl PageHandle {
    /// Wrap a raw page and start the console listener tasks.
    pub(crate) async fn attach(page: Page) -> Result<Self> {
        let console = ConsoleCapture::new();

        let mut console_events = page
            .event_listener::<EventConsoleApiCalled>()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        let sink = console.clone();
        tokio::spawn(async move {
            while let Some(event) = console_events.next().await {
                sink.push(ConsoleMessage::from_console_event(&event));
            }
        });

        let mut exception_events = page
            .event_listener::<EventExceptionThrown>()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        let sink = console.clone();
        tokio::spawn(async move {
            while let Some(event) = exception_events.next().await {
                sink.push(ConsoleMessage::from_exception_event(&event));
            }
        });

        Ok(Self { page, console })
    }

    /// The console capture for this page.
    #[must_use]
    pub fn console(&self) -> &ConsoleCapture {
        &self.console
    }

    /// Close the underlying tab.
    pub async fn close(self) -> Result<()> {
        self.page
            .close()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))
    }

    async fn evaluate<T: DeserializeOwned>(&self, script: String) -> Result<T> {
        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::Evaluation(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::Evaluation(e.to_string()))
    }
}

#[async_trait::async_trait]
impl DomActions for PageHandle {
    async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!("navigating to {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationError(format!("{url}: {e}")))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| BrowserError::NavigationError(format!("{url}: {e}")))?;
        Ok(())
    }

    async fn count(&self, selector: &str) -> Result<u32> {
        let script = format!(
            "document.querySelectorAll({}).length",
            js_string(selector)
        );
        self.evaluate(script).await
    }

    async fn count_with_text(&self, selector: &str, text: &str) -> Result<u32> {
        let script = format!(
            r"Array.from(document.querySelectorAll({sel}))
                .filter((el) => (el.textContent || '').includes({text}))
                .length",
            sel = js_string(selector),
            text = js_string(text),
        );
        self.evaluate(script).await
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let script = format!(
            r"(() => {{
                const visible = (el) => {{
                    const rect = el.getBoundingClientRect();
                    const style = window.getComputedStyle(el);
                    return rect.width > 0 && rect.height > 0
                        && style.display !== 'none' && style.visibility !== 'hidden';
                }};
                return Array.from(document.querySelectorAll({sel})).some(visible);
            }})()",
            sel = js_string(selector),
        );
        self.evaluate(script).await
    }

    async fn is_visible_with_text(&self, selector: &str, text: &str) -> Result<bool> {
        let script = format!(
            r"(() => {{
                const visible = (el) => {{
                    const rect = el.getBoundingClientRect();
                    const style = window.getComputedStyle(el);
                    return rect.width > 0 && rect.height > 0
                        && style.display !== 'none' && style.visibility !== 'hidden';
                }};
                return Array.from(document.querySelectorAll({sel}))
                    .some((el) => visible(el) && (el.textContent || '').includes({text}));
            }})()",
            sel = js_string(selector),
            text = js_string(text),
        );
        self.evaluate(script).await
    }

    async fn set_viewport(&self, width: u32, height: u32, mobile: bool) -> Result<()> {
        let params = SetDeviceMetricsOverrideParams::builder()
            .width(i64::from(width))
            .height(i64::from(height))
            .device_scale_factor(1.0)
            .mobile(mobile)
            .build()
            .map_err(BrowserError::ChromiumError)?;

        self.page
            .execute(params)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }

    fn console_errors(&self, benign_patterns: &[String]) -> Vec<String> {
        self.console.errors_excluding(benign_patterns)
    }
}
