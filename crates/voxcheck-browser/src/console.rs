//! Console message capture.
//!
//! Each page gets a `ConsoleCapture` fed by a spawned listener task so checks
//! can assert on the error messages accumulated during load and rendering.

use chromiumoxide::cdp::js_protocol::runtime::{
    ConsoleApiCalledType, EventConsoleApiCalled, EventExceptionThrown, RemoteObject,
};
use std::sync::{Arc, Mutex};

/// Severity of a captured console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Info,
    Warning,
    Error,
}

/// One console message observed on a page.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub text: String,
}

impl ConsoleMessage {
    pub fn new(level: ConsoleLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub(crate) fn from_console_event(event: &EventConsoleApiCalled) -> Self {
        let level = match event.r#type {
            ConsoleApiCalledType::Error | ConsoleApiCalledType::Assert => ConsoleLevel::Error,
            ConsoleApiCalledType::Warning => ConsoleLevel::Warning,
            ConsoleApiCalledType::Info => ConsoleLevel::Info,
            _ => ConsoleLevel::Log,
        };

        let text = event
            .args
            .iter()
            .map(render_remote_object)
            .collect::<Vec<_>>()
            .join(" ");

        Self { level, text }
    }

    pub(crate) fn from_exception_event(event: &EventExceptionThrown) -> Self {
        let details = &event.exception_details;
        let text = details
            .exception
            .as_ref()
            .map(render_remote_object)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| details.text.clone());

        Self {
            level: ConsoleLevel::Error,
            text,
        }
    }
}

fn render_remote_object(obj: &RemoteObject) -> String {
    if let Some(value) = &obj.value {
        match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    } else {
        obj.description.clone().unwrap_or_default()
    }
}

/// Thread-safe accumulation of console messages for one page.
///
/// Clones share the same buffer; the listener task holds one clone and the
/// page handle another.
#[derive(Debug, Clone, Default)]
pub struct ConsoleCapture {
    messages: Arc<Mutex<Vec<ConsoleMessage>>>,
}

impl ConsoleCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, message: ConsoleMessage) {
        if message.level == ConsoleLevel::Error {
            tracing::debug!("console error captured: {}", message.text);
        }
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }

    /// All messages captured so far.
    #[must_use]
    pub fn messages(&self) -> Vec<ConsoleMessage> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Texts of all error-level messages captured so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|m| m.level == ConsoleLevel::Error)
            .map(|m| m.text)
            .collect()
    }

    /// Error texts with benign patterns filtered out.
    ///
    /// A message is benign if it contains any pattern, case-insensitively.
    /// The known benign case is the browser's favicon fetch failure.
    #[must_use]
    pub fn errors_excluding(&self, patterns: &[String]) -> Vec<String> {
        self.errors()
            .into_iter()
            .filter(|text| {
                let lower = text.to_lowercase();
                !patterns.iter().any(|p| lower.contains(&p.to_lowercase()))
            })
            .collect()
    }
}
