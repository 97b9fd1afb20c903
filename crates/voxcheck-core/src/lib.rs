//! Voxcheck Core - Foundation crate for the Voxcheck site verification suite.
//!
//! This crate provides the error types, TOML configuration, and the DOM
//! contract (page inventory and selector constants) that the browser and
//! suite crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with environment overrides
//! - [`contract`] - The portfolio page inventory and the selectors the site
//!   under test is expected to expose
//!
//! # Example
//!
//! ```rust
//! use voxcheck_core::{CheckConfig, PORTFOLIO_PAGES};
//!
//! let config = CheckConfig::default();
//! assert_eq!(PORTFOLIO_PAGES.len(), 5);
//! assert_eq!(config.site.brand, "Pruitt Colon");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod contract;
pub mod error;

// Re-export commonly used types
pub use config::{BrowserSettings, CheckConfig, DashboardSettings, SiteSettings, WaitSettings};
pub use contract::{dashboard, file_url, header, PortfolioPage, PORTFOLIO_PAGES};
pub use error::{ConfigError, ConfigResult, Result, VoxcheckError};
