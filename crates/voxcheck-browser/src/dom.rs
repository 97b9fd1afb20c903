//! The DOM probe surface checks are written against.
//!
//! Checks take `&impl DomActions` so suite logic can be unit tested against a
//! fake DOM; [`crate::PageHandle`] is the real implementation.

use crate::error::Result;
use crate::wait::{wait_until, WaitConfig};

/// Probe operations over one loaded page.
#[async_trait::async_trait]
pub trait DomActions: Sync {
    /// Navigate to a URL and wait for the navigation to settle.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Number of elements matching a selector.
    async fn count(&self, selector: &str) -> Result<u32>;

    /// Number of matching elements whose text content contains `text`.
    async fn count_with_text(&self, selector: &str, text: &str) -> Result<u32>;

    /// Whether any matching element is visible (non-zero rect, not hidden).
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Whether any visible matching element contains `text`.
    async fn is_visible_with_text(&self, selector: &str, text: &str) -> Result<bool>;

    /// Override the viewport dimensions.
    async fn set_viewport(&self, width: u32, height: u32, mobile: bool) -> Result<()>;

    /// Error-level console messages accumulated on this page so far.
    fn console_errors(&self, benign_patterns: &[String]) -> Vec<String>;

    /// Poll until a selector becomes visible or the wait times out.
    async fn wait_until_visible(&self, selector: &str, wait: &WaitConfig) -> Result<()> {
        wait_until(wait, &format!("`{selector}` visible"), || {
            self.is_visible(selector)
        })
        .await
    }
}

/// Render a Rust string as a JavaScript string literal.
///
/// Selectors and expected texts are embedded in probe scripts; JSON escaping
/// keeps quotes and backslashes intact.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::to_string(s).expect("string serialization should never fail")
}
