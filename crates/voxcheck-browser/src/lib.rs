//! Browser automation engine for the Voxcheck suite.
//!
//! Provides headless Chromium control over CDP: page navigation, DOM probes
//! evaluated as JavaScript, console capture, and bounded condition polling.

pub mod console;
pub mod dom;
pub mod engine;
pub mod error;
pub mod page;
pub mod wait;

pub use console::{ConsoleCapture, ConsoleLevel, ConsoleMessage};
pub use dom::DomActions;
pub use engine::BrowserEngine;
pub use error::{BrowserError, Result};
pub use page::PageHandle;
pub use wait::{wait_until, WaitConfig};
