//! Shutter CLI support library
//!
//! Headless scenario runs for the camera button: a JSON [`scenario::Scenario`]
//! drives touches and time, [`runner::run_loaded_scenario`] executes it, and a
//! [`report::ScenarioReport`] records the outcome.

pub mod report;
pub mod runner;
pub mod scenario;

pub use report::{ListenerCounts, ReportStatus, RunSummary, ScenarioReport, StepFailure};
pub use runner::{run_loaded_scenario, run_scenario};
pub use scenario::{Scenario, ScenarioStep};
