//! Touch event model
//!
//! Platform layers convert their native motion events into [`TouchEvent`]s
//! before handing them to widgets.

use crate::geometry::Point;

/// Phase of a single-pointer touch gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Pointer went down
    Down,
    /// Pointer moved while down
    Move,
    /// Pointer lifted
    Up,
    /// Gesture taken away by the system (e.g. a parent started scrolling)
    Cancel,
}

/// A touch event in view-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// X coordinate relative to the view's left edge
    pub x: f32,
    /// Y coordinate relative to the view's top edge
    pub y: f32,
    /// Event time in milliseconds
    pub timestamp: u64,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            timestamp: 0,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Up, x, y)
    }

    /// Cancel events carry no meaningful position
    pub fn cancel() -> Self {
        Self::new(TouchPhase::Cancel, 0.0, 0.0)
    }

    /// Set the event timestamp
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
