//! Voxcheck harness: runs both check suites against the configured site and
//! demo server, reporting one pass/fail line per check.
//!
//! Configuration comes from `voxcheck.toml` / environment overrides; there
//! are no command-line flags. Exits non-zero if any check fails.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use voxcheck_browser::BrowserEngine;
use voxcheck_core::CheckConfig;
use voxcheck_suite::{run_dashboard_suite, run_header_suite, CheckOutcome};

fn report(outcomes: &[CheckOutcome]) -> usize {
    let mut failures = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(()) => tracing::info!("PASS  {}", outcome.name),
            Err(e) => {
                failures += 1;
                tracing::error!("FAIL  {}: {}", outcome.name, e);
            }
        }
    }
    failures
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CheckConfig::load_with_env().context("loading configuration")?;
    tracing::info!(
        site_root = %config.site.root.display(),
        dashboard = %config.dashboard.page_url(),
        "starting voxcheck"
    );

    let engine = BrowserEngine::with_settings(&config.browser)
        .await
        .context("launching browser")?;

    let header_outcomes = run_header_suite(&engine, &config).await;
    let dashboard_outcomes = run_dashboard_suite(&engine, &config).await;

    let failures = report(&header_outcomes) + report(&dashboard_outcomes);
    let total = header_outcomes.len() + dashboard_outcomes.len();

    if let Err(e) = engine.close().await {
        tracing::warn!("failed to close browser: {}", e);
    }

    if failures > 0 {
        tracing::error!("{failures} of {total} checks failed");
        std::process::exit(1);
    }

    tracing::info!("all {total} checks passed");
    Ok(())
}
