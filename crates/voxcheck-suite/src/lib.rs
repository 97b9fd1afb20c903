//! The Voxcheck check suites.
//!
//! Two independent suites, both leaves over the browser engine:
//!
//! - [`header`] verifies that every portfolio page renders the same `vox-`
//!   navigation header (logo, brand text, call-to-action, nav links, active
//!   marker) and that the collapsed-menu toggle appears on mobile widths.
//! - [`dashboard`] verifies that the NexusAI demo dashboard's charts render
//!   their canvas / Plotly surfaces, that no unexpected console errors
//!   accumulate, and that charts survive a viewport resize.
//!
//! Checks are written against [`voxcheck_browser::DomActions`], so their
//! assertion logic is unit-testable against a fake DOM; the [`runner`] wires
//! them to real browser pages.

pub mod dashboard;
pub mod error;
pub mod header;
mod probes;
pub mod runner;
#[cfg(test)]
mod testutil;

pub use error::{CheckError, CheckResult};
pub use header::HeaderExpectations;
pub use runner::{run_dashboard_suite, run_header_suite, CheckOutcome, DashboardCheck};
