//! Dashboard visualization checks for the NexusAI demo page.
//!
//! The page's chart libraries (ECharts gauges/radar/donut, a Plotly timeline)
//! render asynchronously and expose no completion signal, so every check polls
//! the visibility assertion itself under the configured render timeout rather
//! than sleeping for a fixed delay.

use crate::error::{CheckError, CheckResult};
use crate::probes::expect_visible_within;
use voxcheck_browser::{DomActions, WaitConfig};
use voxcheck_core::contract::dashboard::{
    DONUT, ENGINES_SECTION, ENGINE_CARDS, GAUGE_IDS, PLOTLY_PLOT, RADAR, RESIZE_VIEWPORT,
    SECTION, SECTION_TITLE, TIMELINE,
};
use voxcheck_core::DashboardSettings;

/// Navigate to the dashboard page and wait for the dashboard section to
/// appear.
pub async fn open_dashboard(
    page: &impl DomActions,
    settings: &DashboardSettings,
    wait: &WaitConfig,
) -> CheckResult<()> {
    page.goto(&settings.page_url()).await?;
    expect_visible_within(page, &settings.page_path, SECTION, wait).await
}

/// The dashboard section is visible and carries its title text.
pub async fn check_dashboard_section(
    page: &impl DomActions,
    page_name: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    expect_visible_within(page, page_name, SECTION, wait).await?;

    if page.is_visible_with_text(SECTION, SECTION_TITLE).await? {
        Ok(())
    } else {
        Err(CheckError::Expectation {
            page: page_name.to_string(),
            selector: SECTION.to_string(),
            expected: format!("visible text {SECTION_TITLE:?}"),
            actual: "title text not found".to_string(),
        })
    }
}

/// Each of the four timing gauges holds a rendered canvas.
pub async fn check_timing_gauges(
    page: &impl DomActions,
    page_name: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    for gauge_id in GAUGE_IDS {
        let container = format!("#{gauge_id}");
        expect_visible_within(page, page_name, &container, wait).await?;
        expect_visible_within(page, page_name, &format!("{container} canvas"), wait).await?;
    }
    Ok(())
}

/// The category radar chart holds a rendered canvas.
pub async fn check_category_radar(
    page: &impl DomActions,
    page_name: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    expect_visible_within(page, page_name, RADAR, wait).await?;
    expect_visible_within(page, page_name, &format!("{RADAR} canvas"), wait).await
}

/// The success-rate donut chart holds a rendered canvas.
pub async fn check_success_donut(
    page: &impl DomActions,
    page_name: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    expect_visible_within(page, page_name, DONUT, wait).await?;
    expect_visible_within(page, page_name, &format!("{DONUT} canvas"), wait).await
}

/// The execution timeline holds a rendered Plotly plot.
pub async fn check_execution_timeline(
    page: &impl DomActions,
    page_name: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    expect_visible_within(page, page_name, TIMELINE, wait).await?;
    expect_visible_within(page, page_name, &format!("{TIMELINE} {PLOTLY_PLOT}"), wait).await
}

/// The engines section shows at least one result card.
pub async fn check_engine_results(
    page: &impl DomActions,
    page_name: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    expect_visible_within(page, page_name, ENGINES_SECTION, wait).await?;
    expect_visible_within(page, page_name, ENGINE_CARDS, wait).await
}

/// No unexpected console errors accumulated while the dashboard rendered.
///
/// The observation window is bounded by waiting for the first gauge canvas,
/// i.e. the point where the rendering pipeline has demonstrably run.
pub async fn check_console_clean(
    page: &impl DomActions,
    page_name: &str,
    settings: &DashboardSettings,
    wait: &WaitConfig,
) -> CheckResult<()> {
    let first_gauge = format!("#{} canvas", GAUGE_IDS[0]);
    expect_visible_within(page, page_name, &first_gauge, wait).await?;

    let errors = page.console_errors(&settings.benign_error_patterns);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CheckError::ConsoleErrors {
            page: page_name.to_string(),
            messages: errors,
        })
    }
}

/// After a viewport resize the radar chart stays visible.
///
/// A non-crash proxy only: new pixel dimensions are not compared.
pub async fn check_resize_keeps_charts(
    page: &impl DomActions,
    page_name: &str,
    wait: &WaitConfig,
) -> CheckResult<()> {
    let radar_canvas = format!("{RADAR} canvas");
    expect_visible_within(page, page_name, &radar_canvas, wait).await?;

    let (width, height) = RESIZE_VIEWPORT;
    page.set_viewport(width, height, false).await?;

    expect_visible_within(page, page_name, &radar_canvas, wait).await
}
