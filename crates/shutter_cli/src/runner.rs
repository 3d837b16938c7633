//! Scenario runner that drives a headless camera button.
//!
//! Time only moves on `wait` and `tick` steps, in frames of the scenario's
//! `tick_ms`. Every frame advances the button and then asks it for a frame
//! description, the way a host renderer would, so consistency faults surface
//! as failed runs.

use crate::report::{ListenerCounts, RunSummary, ScenarioReport, StepFailure};
use crate::scenario::{Scenario, ScenarioStep};
use anyhow::{bail, Result};
use shutter_core::{Size, TouchEvent};
use shutter_widgets::{ButtonConfig, CameraButton, HoldListener};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Execute scenario JSON against a button built from `config`.
pub fn run_scenario(input: &str, config: ButtonConfig) -> Result<ScenarioReport> {
    let scenario = Scenario::from_json(input)?;
    run_loaded_scenario(&scenario, config)
}

/// Execute a pre-loaded scenario against a button built from `config`.
///
/// Assertion and consistency failures produce a failed report; only an
/// unusable scenario or configuration is an error.
pub fn run_loaded_scenario(scenario: &Scenario, config: ButtonConfig) -> Result<ScenarioReport> {
    if scenario.width == 0 || scenario.height == 0 {
        bail!("scenario dimensions must be non-zero");
    }
    if scenario.tick_ms == 0 {
        bail!("scenario tick_ms must be > 0");
    }

    let mut harness = Harness::new(scenario, config)?;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step_index, step = step.name(), "running step");
        if let Err((assertion, message)) = harness.step(step) {
            tracing::info!(step_index, assertion, %message, "scenario failed");
            let failure = StepFailure {
                step_index,
                step: step.name().to_string(),
                assertion: assertion.to_string(),
                message,
            };
            return Ok(ScenarioReport::failed(failure, harness.summary()));
        }
    }

    let summary = harness.summary();
    tracing::info!(
        frames = summary.elapsed_frames,
        elapsed_ms = summary.elapsed_ms,
        state = %summary.final_state,
        "scenario passed"
    );
    Ok(ScenarioReport::passed(summary))
}

#[derive(Debug, Default)]
struct Counters {
    state_changes: AtomicU32,
    taps: AtomicU32,
    holds_started: AtomicU32,
    holds_finished: AtomicU32,
}

impl Counters {
    fn snapshot(&self) -> ListenerCounts {
        ListenerCounts {
            state_changes: self.state_changes.load(Ordering::Relaxed),
            taps: self.taps.load(Ordering::Relaxed),
            holds_started: self.holds_started.load(Ordering::Relaxed),
            holds_finished: self.holds_finished.load(Ordering::Relaxed),
        }
    }
}

struct HoldCounter(Arc<Counters>);

impl HoldListener for HoldCounter {
    fn on_start(&mut self) {
        self.0.holds_started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_finish(&mut self) {
        self.0.holds_finished.fetch_add(1, Ordering::Relaxed);
    }
}

type StepResult = std::result::Result<(), (&'static str, String)>;

struct Harness {
    button: CameraButton,
    counters: Arc<Counters>,
    tick_ms: u64,
    elapsed_frames: u64,
    elapsed_ms: u64,
}

impl Harness {
    fn new(scenario: &Scenario, config: ButtonConfig) -> Result<Self> {
        let mut button = CameraButton::with_config(config)?;
        button.set_size(Size::new(scenario.width, scenario.height));

        let counters = Arc::new(Counters::default());
        let c = counters.clone();
        button.set_state_change_listener(Some(Box::new(move |state| {
            tracing::debug!(%state, "state changed");
            c.state_changes.fetch_add(1, Ordering::Relaxed);
        })));
        let c = counters.clone();
        button.set_tap_listener(Some(Box::new(move || {
            c.taps.fetch_add(1, Ordering::Relaxed);
        })));
        button.set_hold_listener(Some(Box::new(HoldCounter(counters.clone()))));

        Ok(Self {
            button,
            counters,
            tick_ms: scenario.tick_ms,
            elapsed_frames: 0,
            elapsed_ms: 0,
        })
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            elapsed_frames: self.elapsed_frames,
            elapsed_ms: self.elapsed_ms,
            final_state: self.button.state(),
            expanding_factor: self.button.expanding_factor(),
            progress_factor: self.button.progress_factor(),
            counts: self.counters.snapshot(),
        }
    }

    fn step(&mut self, step: &ScenarioStep) -> StepResult {
        match *step {
            ScenarioStep::Down { x, y } => self.touch(TouchEvent::down(x, y)),
            ScenarioStep::Move { x, y } => self.touch(TouchEvent::moved(x, y)),
            ScenarioStep::Up { x, y } => self.touch(TouchEvent::up(x, y)),
            ScenarioStep::Cancel => self.touch(TouchEvent::cancel()),
            ScenarioStep::Click => {
                self.button.click();
                Ok(())
            }
            ScenarioStep::Wait { ms } => {
                let mut remaining = ms;
                let tick = self.tick_ms;
                self.run_frames(wait_frames(ms, tick), || {
                    let step_ms = remaining.min(tick);
                    remaining = remaining.saturating_sub(step_ms);
                    step_ms
                })
            }
            ScenarioStep::Tick { frames } => {
                let tick = self.tick_ms;
                self.run_frames(frames, || tick)
            }
            ScenarioStep::Resize { width, height } => {
                if width == 0 || height == 0 {
                    return Err(("resize", "dimensions must be non-zero".to_string()));
                }
                self.button.set_size(Size::new(width, height));
                Ok(())
            }
            ScenarioStep::AssertState { state } => {
                let actual = self.button.state();
                if actual == state {
                    Ok(())
                } else {
                    Err(("assert_state", format!("expected {state}, got {actual}")))
                }
            }
            ScenarioStep::AssertTaps { count } => {
                let taps = self.counters.snapshot().taps;
                if taps == count {
                    Ok(())
                } else {
                    Err(("assert_taps", format!("expected {count} taps, got {taps}")))
                }
            }
            ScenarioStep::AssertHolds { started, finished } => {
                let counts = self.counters.snapshot();
                if (counts.holds_started, counts.holds_finished) == (started, finished) {
                    Ok(())
                } else {
                    Err((
                        "assert_holds",
                        format!(
                            "expected {started} started / {finished} finished holds, got {} / {}",
                            counts.holds_started, counts.holds_finished
                        ),
                    ))
                }
            }
        }
    }

    fn touch(&mut self, event: TouchEvent) -> StepResult {
        let event = event.at(self.elapsed_ms);
        let handled = self.button.on_touch_event(event);
        tracing::trace!(phase = ?event.phase, x = event.x, y = event.y, handled, "touch");
        Ok(())
    }

    fn run_frames<A>(&mut self, frames: u32, mut advance_ms: A) -> StepResult
    where
        A: FnMut() -> u64,
    {
        for _ in 0..frames {
            let dt = advance_ms();
            self.button.advance(dt);
            self.elapsed_frames = self.elapsed_frames.saturating_add(1);
            self.elapsed_ms = self.elapsed_ms.saturating_add(dt);

            if self.button.take_redraw_request() || self.elapsed_frames == 1 {
                self.button
                    .frame()
                    .map_err(|err| ("consistency", err.to_string()))?;
            }
        }
        Ok(())
    }
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
