//! Wires the check suites to real browser pages.
//!
//! Every check runs on a fresh page (matching the one-page-per-test fixture
//! model), all checks run even after a failure, and outcomes are reported
//! per check with no aggregation beyond pass/fail.

use crate::dashboard;
use crate::error::CheckResult;
use crate::header::{self, HeaderExpectations};
use voxcheck_browser::{BrowserEngine, WaitConfig};
use voxcheck_core::{CheckConfig, PORTFOLIO_PAGES};

/// Result of one named check.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Human-readable check name
    pub name: String,
    /// Pass, or the failure that aborted this check
    pub result: CheckResult<()>,
}

impl CheckOutcome {
    fn new(name: impl Into<String>, result: CheckResult<()>) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }

    /// Whether the check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// The dashboard checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardCheck {
    ConsoleClean,
    Section,
    TimingGauges,
    CategoryRadar,
    SuccessDonut,
    ExecutionTimeline,
    EngineResults,
    ResizeKeepsCharts,
}

impl DashboardCheck {
    /// All dashboard checks.
    pub const ALL: [Self; 8] = [
        Self::ConsoleClean,
        Self::Section,
        Self::TimingGauges,
        Self::CategoryRadar,
        Self::SuccessDonut,
        Self::ExecutionTimeline,
        Self::EngineResults,
        Self::ResizeKeepsCharts,
    ];

    /// Name used in outcome reporting.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ConsoleClean => "dashboard: console clean",
            Self::Section => "dashboard: section visible",
            Self::TimingGauges => "dashboard: timing gauges",
            Self::CategoryRadar => "dashboard: category radar",
            Self::SuccessDonut => "dashboard: success donut",
            Self::ExecutionTimeline => "dashboard: execution timeline",
            Self::EngineResults => "dashboard: engine results",
            Self::ResizeKeepsCharts => "dashboard: resize keeps charts",
        }
    }

    async fn run(self, engine: &BrowserEngine, config: &CheckConfig) -> CheckResult<()> {
        let wait = WaitConfig::from(&config.wait);
        let page_name = config.dashboard.page_path.as_str();

        let page = engine.new_page().await?;
        let result = async {
            dashboard::open_dashboard(&page, &config.dashboard, &wait).await?;
            match self {
                Self::ConsoleClean => {
                    dashboard::check_console_clean(&page, page_name, &config.dashboard, &wait)
                        .await
                }
                Self::Section => dashboard::check_dashboard_section(&page, page_name, &wait).await,
                Self::TimingGauges => {
                    dashboard::check_timing_gauges(&page, page_name, &wait).await
                }
                Self::CategoryRadar => {
                    dashboard::check_category_radar(&page, page_name, &wait).await
                }
                Self::SuccessDonut => dashboard::check_success_donut(&page, page_name, &wait).await,
                Self::ExecutionTimeline => {
                    dashboard::check_execution_timeline(&page, page_name, &wait).await
                }
                Self::EngineResults => dashboard::check_engine_results(&page, page_name, &wait).await,
                Self::ResizeKeepsCharts => {
                    dashboard::check_resize_keeps_charts(&page, page_name, &wait).await
                }
            }
        }
        .await;

        // Tab teardown happens regardless of the assertion outcome
        if let Err(e) = page.close().await {
            tracing::warn!("failed to close page: {}", e);
        }

        result
    }
}

/// Run the header consistency suite: one check per portfolio page, plus the
/// mobile nav toggle check.
pub async fn run_header_suite(engine: &BrowserEngine, config: &CheckConfig) -> Vec<CheckOutcome> {
    let expectations = HeaderExpectations::from_site(&config.site);
    let mut outcomes = Vec::new();

    for entry in &PORTFOLIO_PAGES {
        let name = format!("header: {}", entry.file_name);
        let result = match engine.new_page().await {
            Ok(page) => {
                let result =
                    header::open_and_check_page(&page, &config.site, entry, &expectations).await;
                if let Err(e) = page.close().await {
                    tracing::warn!("failed to close page: {}", e);
                }
                result
            }
            Err(e) => Err(e.into()),
        };
        outcomes.push(CheckOutcome::new(name, result));
    }

    let result = match engine.new_page().await {
        Ok(page) => {
            let result = header::check_mobile_nav_toggle(&page, &config.site).await;
            if let Err(e) = page.close().await {
                tracing::warn!("failed to close page: {}", e);
            }
            result
        }
        Err(e) => Err(e.into()),
    };
    outcomes.push(CheckOutcome::new("header: mobile nav toggle", result));

    outcomes
}

/// Run the dashboard visualization suite.
pub async fn run_dashboard_suite(
    engine: &BrowserEngine,
    config: &CheckConfig,
) -> Vec<CheckOutcome> {
    let mut outcomes = Vec::new();

    for check in DashboardCheck::ALL {
        let result = check.run(engine, config).await;
        outcomes.push(CheckOutcome::new(check.name(), result));
    }

    outcomes
}
