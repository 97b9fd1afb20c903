//! The DOM contract of the site under test.
//!
//! The only data this system owns are two fixed enumerations: the portfolio
//! pages (with their expected active nav label) and the selectors/ids the
//! markup is expected to expose. Changing the site's markup means updating
//! these constants in lockstep.

use crate::error::VoxcheckError;
use std::path::Path;
use url::Url;

/// One portfolio page and the nav label expected to carry the active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioPage {
    /// HTML file name relative to the site root
    pub file_name: &'static str,
    /// Expected active nav link label, if the page has a dedicated nav entry
    pub active_nav_label: Option<&'static str>,
}

/// The five portfolio pages checked for header consistency.
///
/// The projects page has no dedicated nav link, so no active-link assertion
/// is made for it.
pub const PORTFOLIO_PAGES: [PortfolioPage; 5] = [
    PortfolioPage {
        file_name: "index.html",
        active_nav_label: Some("Home"),
    },
    PortfolioPage {
        file_name: "about.html",
        active_nav_label: Some("About"),
    },
    PortfolioPage {
        file_name: "architecture.html",
        active_nav_label: Some("Architecture"),
    },
    PortfolioPage {
        file_name: "projects.html",
        active_nav_label: None,
    },
    PortfolioPage {
        file_name: "contact.html",
        active_nav_label: Some("Contact"),
    },
];

/// Header selectors shared by every portfolio page.
pub mod header {
    /// Navigation bar root element
    pub const NAV_ROOT: &str = ".vox-nav";
    /// Logo image inside the logo mark
    pub const LOGO_IMG: &str = ".vox-logo-mark img";
    /// Logo text element (must contain the brand string)
    pub const LOGO_TEXT: &str = ".vox-logo-text";
    /// Call-to-action anchor
    pub const CTA_BUTTON: &str = "a.vox-btn";
    /// Navigation links inside the links container
    pub const NAV_LINKS: &str = ".vox-nav-links .vox-nav-link";
    /// Navigation link carrying the active marker
    pub const ACTIVE_LINK: &str = ".vox-nav-link.active";
    /// Collapsed-menu toggle, visible on mobile widths
    pub const NAV_TOGGLE: &str = ".vox-nav-toggle";

    /// Mobile viewport under which the nav toggle must be visible
    pub const MOBILE_VIEWPORT: (u32, u32) = (375, 667);
}

/// Dashboard selectors and ids.
pub mod dashboard {
    /// Dashboard section container
    pub const SECTION: &str = "#performance-dashboard";
    /// Title text expected within the dashboard section
    pub const SECTION_TITLE: &str = "Performance Dashboard";

    /// Timing gauge containers; each must hold a rendered canvas
    pub const GAUGE_IDS: [&str; 4] = [
        "gauge-total-time",
        "gauge-avg-time",
        "gauge-fastest",
        "gauge-slowest",
    ];

    /// Category radar chart container
    pub const RADAR: &str = "#category-radar";
    /// Success-rate donut chart container
    pub const DONUT: &str = "#success-donut";
    /// Execution timeline container (Plotly)
    pub const TIMELINE: &str = "#execution-timeline";
    /// Element class Plotly attaches to rendered plots
    pub const PLOTLY_PLOT: &str = ".js-plotly-plot";
    /// Engine results section container
    pub const ENGINES_SECTION: &str = "#all-engines-section";
    /// Result card classes (the markup uses both)
    pub const ENGINE_CARDS: &str = ".engine-card, .engine-result-card";

    /// Viewport used by the resize check
    pub const RESIZE_VIEWPORT: (u32, u32) = (800, 600);
}

/// Build the `file://` URL for a portfolio page under the site root.
///
/// The joined path must exist; the root is canonicalized so relative site
/// roots work regardless of the working directory.
///
/// # Errors
/// Returns error if the file does not exist or cannot be expressed as a URL.
pub fn file_url(site_root: &Path, file_name: &str) -> Result<Url, VoxcheckError> {
    let path = site_root.join(file_name);
    let path = path.canonicalize().map_err(|e| {
        VoxcheckError::Validation(format!("page file not found: {}: {e}", path.display()))
    })?;

    Url::from_file_path(&path).map_err(|()| {
        VoxcheckError::Validation(format!("not a valid file path: {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_inventory() {
        assert_eq!(PORTFOLIO_PAGES.len(), 5);

        let active_labels: Vec<_> = PORTFOLIO_PAGES
            .iter()
            .filter_map(|p| p.active_nav_label)
            .collect();
        assert_eq!(
            active_labels,
            vec!["Home", "About", "Architecture", "Contact"]
        );

        let projects = PORTFOLIO_PAGES
            .iter()
            .find(|p| p.file_name == "projects.html")
            .expect("projects page in inventory");
        assert!(projects.active_nav_label.is_none());
    }

    #[test]
    fn test_gauge_ids() {
        assert_eq!(dashboard::GAUGE_IDS.len(), 4);
        for id in dashboard::GAUGE_IDS {
            assert!(id.starts_with("gauge-"), "unexpected gauge id: {id}");
        }
    }

    #[test]
    fn test_file_url() {
        let tmp = tempfile::TempDir::new().expect("create temp dir");
        std::fs::write(tmp.path().join("index.html"), "<html></html>")
            .expect("write page file");

        let url = file_url(tmp.path(), "index.html").expect("build file URL");
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/index.html"));
    }

    #[test]
    fn test_file_url_missing_page() {
        let tmp = tempfile::TempDir::new().expect("create temp dir");
        let err = file_url(tmp.path(), "missing.html").expect_err("missing file rejected");
        assert!(err.to_string().contains("missing.html"));
    }
}
