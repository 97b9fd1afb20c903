//! Shared assertion helpers over the DOM probe surface.

use crate::error::{CheckError, CheckResult};
use voxcheck_browser::{DomActions, WaitConfig};

/// Exactly `expected` elements match the selector.
pub(crate) async fn expect_count(
    page: &impl DomActions,
    page_name: &str,
    selector: &str,
    expected: u32,
) -> CheckResult<()> {
    let actual = page.count(selector).await?;
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::Expectation {
            page: page_name.to_string(),
            selector: selector.to_string(),
            expected: format!("exactly {expected} element(s)"),
            actual: actual.to_string(),
        })
    }
}

/// Exactly `expected` matching elements contain the given text.
pub(crate) async fn expect_count_with_text(
    page: &impl DomActions,
    page_name: &str,
    selector: &str,
    text: &str,
    expected: u32,
) -> CheckResult<()> {
    let actual = page.count_with_text(selector, text).await?;
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::Expectation {
            page: page_name.to_string(),
            selector: selector.to_string(),
            expected: format!("exactly {expected} element(s) containing {text:?}"),
            actual: actual.to_string(),
        })
    }
}

/// At least `minimum` elements match the selector.
pub(crate) async fn expect_at_least(
    page: &impl DomActions,
    page_name: &str,
    selector: &str,
    minimum: u32,
) -> CheckResult<()> {
    let actual = page.count(selector).await?;
    if actual >= minimum {
        Ok(())
    } else {
        Err(CheckError::Expectation {
            page: page_name.to_string(),
            selector: selector.to_string(),
            expected: format!("at least {minimum} element(s)"),
            actual: actual.to_string(),
        })
    }
}

/// A matching element is visible right now.
pub(crate) async fn expect_visible(
    page: &impl DomActions,
    page_name: &str,
    selector: &str,
) -> CheckResult<()> {
    if page.is_visible(selector).await? {
        Ok(())
    } else {
        Err(CheckError::Expectation {
            page: page_name.to_string(),
            selector: selector.to_string(),
            expected: "a visible element".to_string(),
            actual: "none visible".to_string(),
        })
    }
}

/// A matching element becomes visible before the wait times out.
pub(crate) async fn expect_visible_within(
    page: &impl DomActions,
    page_name: &str,
    selector: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    page.wait_until_visible(selector, wait)
        .await
        .map_err(|e| match e {
            voxcheck_browser::BrowserError::Timeout(_) => CheckError::Expectation {
                page: page_name.to_string(),
                selector: selector.to_string(),
                expected: format!("a visible element within {:?}", wait.timeout),
                actual: "none visible".to_string(),
            },
            other => CheckError::Browser(other),
        })
}
