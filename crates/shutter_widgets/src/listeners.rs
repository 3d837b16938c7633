//! Listener slots
//!
//! Each kind of listener has exactly one slot. Setting a listener replaces
//! the previous one and setting `None` clears it.

use crate::state::State;

/// Called on every state transition with the new state
pub type StateChangeListener = Box<dyn FnMut(State) + Send>;

/// Called when a press finishes as a tap
pub type TapListener = Box<dyn FnMut() + Send>;

/// Called with the hold progress (0.0 to 1.0) while the progress arc fills
pub type ProgressListener = Box<dyn FnMut(f32) + Send>;

/// Hold gesture callbacks
pub trait HoldListener: Send {
    /// The button finished expanding
    fn on_start(&mut self);

    /// The button started collapsing after being fully expanded
    fn on_finish(&mut self);

    /// Reserved. No transition currently reports a canceled hold.
    fn on_cancel(&mut self) {}
}

/// The four listener slots of a button
#[derive(Default)]
pub struct Listeners {
    pub(crate) state: Option<StateChangeListener>,
    pub(crate) tap: Option<TapListener>,
    pub(crate) hold: Option<Box<dyn HoldListener>>,
    pub(crate) progress: Option<ProgressListener>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("state", &self.state.is_some())
            .field("tap", &self.tap.is_some())
            .field("hold", &self.hold.is_some())
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
