//! Button state and transition dispatch
//!
//! [`ButtonCore`] is the single record shared by the touch handler and the
//! animation orchestrator: the current [`State`], the interpolation factors
//! the renderer reads, the paint/arming flags and the listener slots. Both
//! sides receive it by `&mut`, one at a time.

use crate::config::Mode;
use crate::listeners::Listeners;
use serde::{Deserialize, Serialize};
use shutter_core::fsm::StateMachine;
use std::fmt;

/// Button states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Default,
    Pressed,
    StartExpanding,
    Expanded,
    StartCollapsing,
}

impl State {
    /// Expanding or fully expanded
    pub fn is_expanding_or_expanded(self) -> bool {
        matches!(self, State::StartExpanding | State::Expanded)
    }

    pub fn name(self) -> &'static str {
        match self {
            State::Default => "DEFAULT",
            State::Pressed => "PRESSED",
            State::StartExpanding => "START_EXPANDING",
            State::Expanded => "EXPANDED",
            State::StartCollapsing => "START_COLLAPSING",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared mutable state of a camera button
#[derive(Debug)]
pub struct ButtonCore {
    fsm: StateMachine<State>,
    pub(crate) expanding_factor: f32,
    pub(crate) progress_factor: f32,
    pub(crate) collapse_on_next_click: bool,
    pub(crate) hovered: bool,
    taps_muted: bool,
    redraw_requested: bool,
    pub(crate) listeners: Listeners,
}

impl Default for ButtonCore {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonCore {
    pub fn new() -> Self {
        Self {
            fsm: StateMachine::new(State::Default),
            expanding_factor: 0.0,
            progress_factor: 0.0,
            collapse_on_next_click: false,
            hovered: false,
            taps_muted: false,
            redraw_requested: false,
            listeners: Listeners::default(),
        }
    }

    pub fn state(&self) -> State {
        self.fsm.current_state()
    }

    /// Recent transitions, oldest first
    pub fn history(&self) -> Vec<(State, State)> {
        self.fsm.history()
    }

    /// Collapsed (0.0) to expanded (1.0) blend
    pub fn expanding_factor(&self) -> f32 {
        self.expanding_factor
    }

    /// Fraction of the hold duration elapsed
    pub fn progress_factor(&self) -> f32 {
        self.progress_factor
    }

    /// Whether the next click (or release inside) collapses the button
    pub fn collapse_on_next_click(&self) -> bool {
        self.collapse_on_next_click
    }

    /// Whether pressed colors are in effect
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.request_redraw();
        }
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Return and clear the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Run `f` with the tap listener silenced.
    ///
    /// Transitions inside `f` still reach the state and hold listeners.
    pub(crate) fn without_taps<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let muted = std::mem::replace(&mut self.taps_muted, true);
        let result = f(self);
        self.taps_muted = muted;
        result
    }

    /// Move to `state` and notify listeners.
    ///
    /// The state listener always hears about the transition. Hold listeners
    /// hear about entering `Expanded` and leaving it for `StartCollapsing`
    /// when `mode` is expandable; the tap listener hears about
    /// `Pressed -> Default` and `StartExpanding -> StartCollapsing` when
    /// `mode` is pressable and taps are not muted. Never starts or cancels
    /// animations.
    pub fn dispatch_transition(&mut self, state: State, mode: Mode) {
        let previous = self.fsm.transition(state);
        tracing::debug!("dispatch state change {previous} -> {state}");

        if let Some(listener) = self.listeners.state.as_mut() {
            listener(state);
        }

        if mode.is_expandable() {
            if let Some(listener) = self.listeners.hold.as_mut() {
                if state == State::Expanded {
                    listener.on_start();
                } else if previous == State::Expanded && state == State::StartCollapsing {
                    listener.on_finish();
                }
            }
        }

        if mode.is_pressable() && !self.taps_muted {
            if let Some(listener) = self.listeners.tap.as_mut() {
                let tapped = (previous == State::Pressed && state == State::Default)
                    || (previous == State::StartExpanding && state == State::StartCollapsing);
                if tapped {
                    listener();
                }
            }
        }
    }

    /// Notify the progress listener
    pub fn dispatch_progress(&mut self, progress: f32) {
        if let Some(listener) = self.listeners.progress.as_mut() {
            listener(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::HoldListener;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Counts {
        states: Vec<State>,
        taps: u32,
        hold_starts: u32,
        hold_finishes: u32,
    }

    struct Hold(Arc<Mutex<Counts>>);

    impl HoldListener for Hold {
        fn on_start(&mut self) {
            self.0.lock().unwrap().hold_starts += 1;
        }

        fn on_finish(&mut self) {
            self.0.lock().unwrap().hold_finishes += 1;
        }
    }

    fn observed_core() -> (ButtonCore, Arc<Mutex<Counts>>) {
        let counts = Arc::new(Mutex::new(Counts::default()));
        let mut core = ButtonCore::new();

        let c = counts.clone();
        core.listeners.state = Some(Box::new(move |s| c.lock().unwrap().states.push(s)));
        let c = counts.clone();
        core.listeners.tap = Some(Box::new(move || c.lock().unwrap().taps += 1));
        core.listeners.hold = Some(Box::new(Hold(counts.clone())));

        (core, counts)
    }

    #[test]
    fn test_state_listener_hears_everything() {
        let (mut core, counts) = observed_core();
        core.dispatch_transition(State::Pressed, Mode::All);
        core.dispatch_transition(State::Pressed, Mode::All);
        core.dispatch_transition(State::Default, Mode::All);

        assert_eq!(
            counts.lock().unwrap().states,
            vec![State::Pressed, State::Pressed, State::Default]
        );
        assert_eq!(core.state(), State::Default);
    }

    #[test]
    fn test_tap_edges() {
        let (mut core, counts) = observed_core();

        core.dispatch_transition(State::Pressed, Mode::All);
        core.dispatch_transition(State::Default, Mode::All);
        assert_eq!(counts.lock().unwrap().taps, 1);

        // Interrupted expansion still counts as a tap
        core.dispatch_transition(State::StartExpanding, Mode::All);
        core.dispatch_transition(State::StartCollapsing, Mode::All);
        assert_eq!(counts.lock().unwrap().taps, 2);

        // Collapse after full expansion is not a tap
        core.dispatch_transition(State::Expanded, Mode::All);
        core.dispatch_transition(State::StartCollapsing, Mode::All);
        assert_eq!(counts.lock().unwrap().taps, 2);
    }

    #[test]
    fn test_tap_suppressed_when_not_pressable() {
        let (mut core, counts) = observed_core();
        core.dispatch_transition(State::Pressed, Mode::Hold);
        core.dispatch_transition(State::Default, Mode::Hold);
        assert_eq!(counts.lock().unwrap().taps, 0);
    }

    #[test]
    fn test_muted_taps_still_change_state() {
        let (mut core, counts) = observed_core();
        core.dispatch_transition(State::Pressed, Mode::All);
        core.without_taps(|core| core.dispatch_transition(State::Default, Mode::All));

        core.dispatch_transition(State::Pressed, Mode::All);
        core.dispatch_transition(State::Default, Mode::All);

        let counts = counts.lock().unwrap();
        assert_eq!(counts.taps, 1);
        assert_eq!(counts.states.len(), 4);
    }

    #[test]
    fn test_hold_edges() {
        let (mut core, counts) = observed_core();
        core.dispatch_transition(State::StartExpanding, Mode::All);
        core.dispatch_transition(State::Expanded, Mode::All);
        core.dispatch_transition(State::StartCollapsing, Mode::All);
        core.dispatch_transition(State::Default, Mode::All);

        let counts = counts.lock().unwrap();
        assert_eq!(counts.hold_starts, 1);
        assert_eq!(counts.hold_finishes, 1);
        assert_eq!(counts.taps, 0);
    }

    #[test]
    fn test_hold_suppressed_when_not_expandable() {
        let (mut core, counts) = observed_core();
        core.dispatch_transition(State::Expanded, Mode::Tap);
        core.dispatch_transition(State::StartCollapsing, Mode::Tap);

        let counts = counts.lock().unwrap();
        assert_eq!(counts.hold_starts, 0);
        assert_eq!(counts.hold_finishes, 0);
    }

    #[test]
    fn test_history_and_redraw_flag() {
        let mut core = ButtonCore::new();
        core.dispatch_transition(State::Pressed, Mode::Tap);
        assert_eq!(core.history(), vec![(State::Default, State::Pressed)]);

        assert!(!core.take_redraw_request());
        core.set_hovered(true);
        assert!(core.take_redraw_request());
        assert!(!core.take_redraw_request());
        core.set_hovered(true);
        assert!(!core.take_redraw_request());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(State::StartExpanding.to_string(), "START_EXPANDING");
        assert!(State::Expanded.is_expanding_or_expanded());
        assert!(!State::StartCollapsing.is_expanding_or_expanded());
    }
}
