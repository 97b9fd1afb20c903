use thiserror::Error;
use voxcheck_browser::BrowserError;
use voxcheck_core::VoxcheckError;

/// A failed check, carrying enough context to name the offending
/// page, selector, and expectation.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{page}: `{selector}`: expected {expected}, got {actual}")]
    Expectation {
        page: String,
        selector: String,
        expected: String,
        actual: String,
    },

    #[error("{page}: unexpected console errors: {messages:?}")]
    ConsoleErrors {
        page: String,
        messages: Vec<String>,
    },

    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("core error: {0}")]
    Core(#[from] VoxcheckError),
}

pub type CheckResult<T> = std::result::Result<T, CheckError>;
