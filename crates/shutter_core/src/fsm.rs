//! State Machine Runtime
//!
//! Typed state holder for widget interaction states.
//!
//! Widgets whose transitions are decided by imperative logic (hit tests,
//! animation completions, configuration) use [`StateMachine`] as the single
//! place the current state lives. Every change goes through
//! [`StateMachine::transition`], which records a bounded history for
//! debugging and tests.

use std::collections::VecDeque;
use std::fmt::Debug;

/// Default number of transitions kept in history
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine<S> {
    current_state: S,
    /// History of state transitions (for debugging)
    history: VecDeque<(S, S)>,
    history_limit: usize,
}

impl<S: Copy + Eq + Debug> StateMachine<S> {
    /// Create a new state machine with an initial state
    pub fn new(initial_state: S) -> Self {
        Self::with_history_limit(initial_state, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a state machine that keeps at most `limit` history entries
    pub fn with_history_limit(initial_state: S, limit: usize) -> Self {
        Self {
            current_state: initial_state,
            history: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            history_limit: limit,
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if we're in any of the given states
    pub fn is_any_of(&self, states: &[S]) -> bool {
        states.contains(&self.current_state)
    }

    /// Get transition history, oldest first
    pub fn history(&self) -> Vec<(S, S)> {
        self.history.iter().copied().collect()
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Move to `to_state`, returning the state we left.
    ///
    /// Self-transitions are recorded too; callers decide whether they are
    /// meaningful.
    pub fn transition(&mut self, to_state: S) -> S {
        let from_state = self.current_state;
        self.current_state = to_state;

        tracing::trace!(?from_state, ?to_state, "fsm transition");

        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.pop_front();
            }
            self.history.push_back((from_state, to_state));
        }

        from_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Pointer {
        Idle,
        Hovered,
        Pressed,
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = StateMachine::new(Pointer::Idle);
        assert_eq!(fsm.current_state(), Pointer::Idle);

        assert_eq!(fsm.transition(Pointer::Hovered), Pointer::Idle);
        assert_eq!(fsm.current_state(), Pointer::Hovered);

        assert_eq!(fsm.transition(Pointer::Pressed), Pointer::Hovered);
        assert!(fsm.is_in(Pointer::Pressed));
        assert!(fsm.is_any_of(&[Pointer::Idle, Pointer::Pressed]));
        assert!(!fsm.is_any_of(&[Pointer::Idle, Pointer::Hovered]));
    }

    #[test]
    fn test_history() {
        let mut fsm = StateMachine::new(Pointer::Idle);
        fsm.transition(Pointer::Hovered);
        fsm.transition(Pointer::Pressed);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (Pointer::Idle, Pointer::Hovered));
        assert_eq!(history[1], (Pointer::Hovered, Pointer::Pressed));

        fsm.clear_history();
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut fsm = StateMachine::with_history_limit(Pointer::Idle, 2);
        fsm.transition(Pointer::Hovered);
        fsm.transition(Pointer::Pressed);
        fsm.transition(Pointer::Idle);

        assert_eq!(
            fsm.history(),
            vec![
                (Pointer::Hovered, Pointer::Pressed),
                (Pointer::Pressed, Pointer::Idle)
            ]
        );
    }

    #[test]
    fn test_zero_history_limit_records_nothing() {
        let mut fsm = StateMachine::with_history_limit(Pointer::Idle, 0);
        fsm.transition(Pointer::Pressed);
        assert!(fsm.history().is_empty());
        assert!(fsm.is_in(Pointer::Pressed));
    }
}
