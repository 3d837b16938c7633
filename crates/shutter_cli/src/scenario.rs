//! Scenario definition for headless camera button runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use shutter_widgets::State;
use std::path::Path;

/// Sequence of input, time and assertion steps against one button.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// View width the button is laid out in.
    #[serde(default = "default_extent")]
    pub width: u32,
    /// View height the button is laid out in.
    #[serde(default = "default_extent")]
    pub height: u32,
    /// Logical milliseconds per frame.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    pub steps: Vec<ScenarioStep>,
}

fn default_extent() -> u32 {
    200
}

fn default_tick_ms() -> u64 {
    16
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

/// One scenario step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
    Click,
    Wait { ms: u64 },
    Tick { frames: u32 },
    Resize { width: u32, height: u32 },
    AssertState { state: State },
    AssertTaps { count: u32 },
    AssertHolds { started: u32, finished: u32 },
}

impl ScenarioStep {
    /// Step name as written in scenario files.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::Down { .. } => "down",
            ScenarioStep::Move { .. } => "move",
            ScenarioStep::Up { .. } => "up",
            ScenarioStep::Cancel => "cancel",
            ScenarioStep::Click => "click",
            ScenarioStep::Wait { .. } => "wait",
            ScenarioStep::Tick { .. } => "tick",
            ScenarioStep::Resize { .. } => "resize",
            ScenarioStep::AssertState { .. } => "assert_state",
            ScenarioStep::AssertTaps { .. } => "assert_taps",
            ScenarioStep::AssertHolds { .. } => "assert_holds",
        }
    }
}
