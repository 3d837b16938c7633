//! Report output model for headless scenario runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shutter_widgets::State;
use std::io::Write;
use std::path::Path;

/// Report status for a scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// How often each listener fired during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerCounts {
    pub state_changes: u32,
    pub taps: u32,
    pub holds_started: u32,
    pub holds_finished: u32,
}

/// Where the run stood when it ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub final_state: State,
    pub expanding_factor: f32,
    pub progress_factor: f32,
    pub counts: ListenerCounts,
}

/// The step that stopped a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    pub step_index: usize,
    pub step: String,
    /// Failure kind, such as `assert_state` or `consistency`
    pub assertion: String,
    pub message: String,
}

/// Machine-readable result of a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<StepFailure>,
    #[serde(flatten)]
    pub summary: RunSummary,
}

impl ScenarioReport {
    pub fn passed(summary: RunSummary) -> Self {
        Self {
            status: ReportStatus::Passed,
            failure: None,
            summary,
        }
    }

    pub fn failed(failure: StepFailure, summary: RunSummary) -> Self {
        Self {
            status: ReportStatus::Failed,
            failure: Some(failure),
            summary,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(path, payload)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            elapsed_frames: 20,
            elapsed_ms: 320,
            final_state: State::Pressed,
            expanding_factor: 0.0,
            progress_factor: 0.0,
            counts: ListenerCounts {
                state_changes: 1,
                ..ListenerCounts::default()
            },
        }
    }

    #[test]
    fn test_failed_report_json() {
        let failure = StepFailure {
            step_index: 3,
            step: "assert_taps".into(),
            assertion: "assert_taps".into(),
            message: "expected 1 tap, got 0".into(),
        };
        let report = ScenarioReport::failed(failure, summary());
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["failure"]["step_index"], 3);
        assert_eq!(value["elapsed_ms"], 320);
        assert_eq!(value["final_state"], "pressed");
        assert_eq!(value["counts"]["state_changes"], 1);
        assert!(!report.is_passed());
    }

    #[test]
    fn test_passed_report_omits_failure() {
        let report = ScenarioReport::passed(summary());
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("failure"));

        let parsed: ScenarioReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
