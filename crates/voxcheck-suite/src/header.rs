//! Header consistency checks for the portfolio pages.
//!
//! Every page must render the same `vox-` navigation header: one nav root,
//! one logo image, the brand string in the logo text, the call-to-action
//! button, at least five nav links, and (where the page has a dedicated nav
//! entry) exactly one link carrying the active marker. Pages are static
//! files, so nothing here polls; the DOM is settled once navigation returns.

use crate::error::CheckResult;
use crate::probes::{expect_at_least, expect_count, expect_count_with_text, expect_visible};
use voxcheck_browser::DomActions;
use voxcheck_core::contract::header;
use voxcheck_core::{file_url, PortfolioPage, SiteSettings, PORTFOLIO_PAGES};

/// What a consistent header must contain, derived from `[site]` config.
#[derive(Debug, Clone)]
pub struct HeaderExpectations {
    /// Brand string the logo text must contain
    pub brand: String,
    /// Call-to-action label
    pub cta_label: String,
    /// Minimum number of nav links
    pub min_nav_links: u32,
}

impl HeaderExpectations {
    /// Build expectations from site settings.
    #[must_use]
    pub fn from_site(site: &SiteSettings) -> Self {
        Self {
            brand: site.brand.clone(),
            cta_label: site.cta_label.clone(),
            min_nav_links: u32::try_from(site.min_nav_links).unwrap_or(u32::MAX),
        }
    }
}

/// Check the header contract on an already-loaded page.
pub async fn check_page_header(
    page: &impl DomActions,
    entry: &PortfolioPage,
    expectations: &HeaderExpectations,
) -> CheckResult<()> {
    let name = entry.file_name;

    expect_count(page, name, header::NAV_ROOT, 1).await?;
    expect_count(page, name, header::LOGO_IMG, 1).await?;
    expect_count(page, name, header::LOGO_TEXT, 1).await?;
    expect_count_with_text(page, name, header::LOGO_TEXT, &expectations.brand, 1).await?;
    expect_count_with_text(page, name, header::CTA_BUTTON, &expectations.cta_label, 1).await?;
    expect_at_least(page, name, header::NAV_LINKS, expectations.min_nav_links).await?;

    // Pages without a dedicated nav entry (projects) assert nothing here
    if let Some(label) = entry.active_nav_label {
        expect_count_with_text(page, name, header::ACTIVE_LINK, label, 1).await?;
    }

    Ok(())
}

/// Navigate to one portfolio page and check its header.
pub async fn open_and_check_page(
    page: &impl DomActions,
    site: &SiteSettings,
    entry: &PortfolioPage,
    expectations: &HeaderExpectations,
) -> CheckResult<()> {
    let url = file_url(&site.root, entry.file_name)?;
    page.goto(url.as_str()).await?;
    check_page_header(page, entry, expectations).await
}

/// Check the header on all five portfolio pages.
///
/// Pages are checked independently; the first failing page aborts with that
/// page named in the error.
pub async fn check_all_page_headers(
    page: &impl DomActions,
    site: &SiteSettings,
) -> CheckResult<()> {
    let expectations = HeaderExpectations::from_site(site);

    for entry in &PORTFOLIO_PAGES {
        tracing::info!("checking header on {}", entry.file_name);
        open_and_check_page(page, site, entry, &expectations).await?;
    }

    Ok(())
}

/// Under a mobile viewport, the collapsed-menu toggle must be visible on the
/// home page.
pub async fn check_mobile_nav_toggle(
    page: &impl DomActions,
    site: &SiteSettings,
) -> CheckResult<()> {
    let (width, height) = header::MOBILE_VIEWPORT;
    page.set_viewport(width, height, true).await?;

    let url = file_url(&site.root, "index.html")?;
    page.goto(url.as_str()).await?;

    expect_visible(page, "index.html", header::NAV_TOGGLE).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use crate::testutil::FakeDom;

    fn expectations() -> HeaderExpectations {
        HeaderExpectations {
            brand: "Pruitt Colon".to_string(),
            cta_label: "View Demo".to_string(),
            min_nav_links: 5,
        }
    }

    fn conforming_page(active_label: Option<&str>) -> FakeDom {
        let mut dom = FakeDom::new()
            .with_count(header::NAV_ROOT, 1)
            .with_count(header::LOGO_IMG, 1)
            .with_count(header::LOGO_TEXT, 1)
            .with_text_count(header::LOGO_TEXT, "Pruitt Colon", 1)
            .with_text_count(header::CTA_BUTTON, "View Demo", 1)
            .with_count(header::NAV_LINKS, 6);
        if let Some(label) = active_label {
            dom = dom.with_text_count(header::ACTIVE_LINK, label, 1);
        }
        dom
    }

    #[tokio::test]
    async fn test_conforming_header_passes() {
        let dom = conforming_page(Some("Home"));
        let entry = PortfolioPage {
            file_name: "index.html",
            active_nav_label: Some("Home"),
        };
        check_page_header(&dom, &entry, &expectations())
            .await
            .expect("conforming header should pass");
    }

    #[tokio::test]
    async fn test_missing_nav_root_fails_with_page_named() {
        let dom = FakeDom::new();
        let entry = PortfolioPage {
            file_name: "about.html",
            active_nav_label: Some("About"),
        };
        let err = check_page_header(&dom, &entry, &expectations())
            .await
            .expect_err("empty DOM should fail");
        let msg = err.to_string();
        assert!(msg.contains("about.html"), "page not named: {msg}");
        assert!(msg.contains(".vox-nav"), "selector not named: {msg}");
    }

    #[tokio::test]
    async fn test_duplicated_nav_root_fails() {
        let dom = conforming_page(Some("Home")).with_count(header::NAV_ROOT, 2);
        let entry = PortfolioPage {
            file_name: "index.html",
            active_nav_label: Some("Home"),
        };
        let err = check_page_header(&dom, &entry, &expectations())
            .await
            .expect_err("duplicate nav root should fail");
        assert!(matches!(err, CheckError::Expectation { .. }));
    }

    #[tokio::test]
    async fn test_wrong_brand_fails() {
        let dom = conforming_page(Some("Home"))
            .with_text_count(header::LOGO_TEXT, "Pruitt Colon", 0);
        let entry = PortfolioPage {
            file_name: "index.html",
            active_nav_label: Some("Home"),
        };
        let err = check_page_header(&dom, &entry, &expectations())
            .await
            .expect_err("wrong brand should fail");
        assert!(err.to_string().contains("Pruitt Colon"));
    }

    #[tokio::test]
    async fn test_too_few_nav_links_fails() {
        let dom = conforming_page(Some("Home")).with_count(header::NAV_LINKS, 4);
        let entry = PortfolioPage {
            file_name: "index.html",
            active_nav_label: Some("Home"),
        };
        let err = check_page_header(&dom, &entry, &expectations())
            .await
            .expect_err("four nav links should fail");
        assert!(err.to_string().contains("at least 5"));
    }

    #[tokio::test]
    async fn test_page_without_nav_entry_skips_active_assertion() {
        // Projects page declares no active label; no active marker required
        let dom = conforming_page(None);
        let entry = PortfolioPage {
            file_name: "projects.html",
            active_nav_label: None,
        };
        check_page_header(&dom, &entry, &expectations())
            .await
            .expect("no active-link assertion for projects");
    }

    #[tokio::test]
    async fn test_missing_active_link_fails() {
        let dom = conforming_page(None);
        let entry = PortfolioPage {
            file_name: "contact.html",
            active_nav_label: Some("Contact"),
        };
        let err = check_page_header(&dom, &entry, &expectations())
            .await
            .expect_err("missing active marker should fail");
        assert!(err.to_string().contains(".vox-nav-link.active"));
    }

    #[tokio::test]
    async fn test_mobile_toggle_check_sets_viewport() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        std::fs::write(tmp.path().join("index.html"), "<html></html>").expect("write page");

        let dom = FakeDom::new().with_visible(header::NAV_TOGGLE);
        let site = SiteSettings {
            root: tmp.path().to_path_buf(),
            ..SiteSettings::default()
        };

        check_mobile_nav_toggle(&dom, &site)
            .await
            .expect("visible toggle should pass");

        let viewports = dom.viewports.lock().expect("viewport log");
        assert_eq!(viewports.as_slice(), &[(375, 667, true)]);
        let navigations = dom.navigations.lock().expect("navigation log");
        assert_eq!(navigations.len(), 1);
        assert!(navigations[0].starts_with("file://"));
        assert!(navigations[0].ends_with("/index.html"));
    }

    #[tokio::test]
    async fn test_mobile_toggle_hidden_fails() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        std::fs::write(tmp.path().join("index.html"), "<html></html>").expect("write page");

        let dom = FakeDom::new();
        let site = SiteSettings {
            root: tmp.path().to_path_buf(),
            ..SiteSettings::default()
        };

        let err = check_mobile_nav_toggle(&dom, &site)
            .await
            .expect_err("hidden toggle should fail");
        assert!(err.to_string().contains(".vox-nav-toggle"));
    }
}
