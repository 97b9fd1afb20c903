//! Configuration management for Voxcheck.
//!
//! Provides TOML-based configuration with environment variable overrides.
//! The config file is looked up next to the checkout (`voxcheck.toml`) rather
//! than in platform config directories, since the harness runs against a
//! working copy of the site.

use crate::error::ConfigResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, resolved relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "voxcheck.toml";

/// Main harness configuration.
///
/// Loaded from `voxcheck.toml` (or the path in `VOXCHECK_CONFIG`). If no file
/// exists, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Portfolio site settings (static file checks)
    pub site: SiteSettings,
    /// Dashboard demo settings (HTTP checks)
    pub dashboard: DashboardSettings,
    /// Browser automation settings
    pub browser: BrowserSettings,
    /// Render-wait settings
    pub wait: WaitSettings,
}

impl CheckConfig {
    /// Load configuration, falling back to defaults if no file is found.
    ///
    /// Lookup order: `VOXCHECK_CONFIG` if set, then `./voxcheck.toml`.
    ///
    /// # Errors
    /// Returns error if a file exists but cannot be read or is not valid TOML.
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `VOXCHECK_SITE_ROOT`: Override the portfolio site directory
    /// - `VOXCHECK_BASE_URL`: Override the dashboard server origin
    /// - `VOXCHECK_HEADLESS`: Override browser headless mode (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides to an existing config.
    pub fn apply_env(&mut self) {
        if let Ok(val) = std::env::var("VOXCHECK_SITE_ROOT") {
            tracing::debug!("Override site.root from env: {}", val);
            self.site.root = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VOXCHECK_BASE_URL") {
            tracing::debug!("Override dashboard.base_url from env: {}", val);
            self.dashboard.base_url = val;
        }

        if let Ok(val) = std::env::var("VOXCHECK_HEADLESS") {
            if let Ok(headless) = val.parse() {
                tracing::debug!("Override browser.headless from env: {}", headless);
                self.browser.headless = headless;
            }
        }
    }

    /// Save configuration to the resolved config path.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path();
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Resolve the configuration file path.
    ///
    /// Uses `VOXCHECK_CONFIG` when set, otherwise `./voxcheck.toml`.
    #[must_use]
    pub fn config_path() -> PathBuf {
        std::env::var("VOXCHECK_CONFIG")
            .map_or_else(|_| PathBuf::from(CONFIG_FILE_NAME), PathBuf::from)
    }
}

/// Portfolio site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Directory containing the portfolio HTML files
    pub root: PathBuf,
    /// Brand string expected in the logo text
    pub brand: String,
    /// Label of the call-to-action button
    pub cta_label: String,
    /// Minimum number of navigation links per page
    pub min_nav_links: usize,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("site"),
            brand: "Pruitt Colon".to_string(),
            cta_label: "View Demo".to_string(),
            min_nav_links: 5,
        }
    }
}

/// Dashboard demo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Origin of the local demo server
    pub base_url: String,
    /// Path of the dashboard page on that server
    pub page_path: String,
    /// Console error substrings considered benign (case-insensitive)
    pub benign_error_patterns: Vec<String>,
}

impl DashboardSettings {
    /// Full URL of the dashboard page.
    #[must_use]
    pub fn page_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.page_path)
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8765".to_string(),
            page_path: "/demo/nexus.html".to_string(),
            benign_error_patterns: vec!["favicon".to_string()],
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Run browser in headless mode
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub navigation_timeout_secs: u64,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            navigation_timeout_secs: 30,
        }
    }
}

/// Render-wait settings.
///
/// Chart rendering on the dashboard is asynchronous with no completion signal,
/// so checks poll the visibility assertions themselves under a bounded timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitSettings {
    /// Maximum time to wait for a chart surface to become visible, in ms
    pub render_timeout_ms: u64,
    /// Interval between visibility polls, in ms
    pub poll_interval_ms: u64,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            render_timeout_ms: 5000,
            poll_interval_ms: 100,
        }
    }
}
