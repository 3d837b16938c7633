//! Value animators
//!
//! A [`ValueAnimator`] is a plain descriptor: start/end values, a duration,
//! an easing curve, the time elapsed so far and a lifecycle phase. It does
//! not own callbacks. The owner advances it with [`ValueAnimator::tick`] and
//! reacts to the returned [`AnimationEvent`]; once [`ValueAnimator::cancel`]
//! returns, no further event is ever produced, so completion logic cannot run
//! on a cancel path.

use crate::easing::Easing;
use std::fmt;

/// Identity of a started animation.
///
/// Owners compare ids to tell a live animation apart from a stale one that
/// has since been canceled and replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "anim#{}", self.0)
    }
}

/// Monotonic id generator, one per animation owner
#[derive(Debug, Default)]
pub struct AnimationIds {
    next: u64,
}

impl AnimationIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> AnimationId {
        self.next += 1;
        AnimationId(self.next)
    }
}

/// Lifecycle phase of an animator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Created, not started
    Idle,
    Running,
    /// Reached its end value
    Finished,
    /// Stopped before reaching its end value
    Canceled,
}

/// What happened during a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationEvent {
    /// New interpolated value
    Update(f32),
    /// Reached the end value; no further events follow
    End(f32),
}

impl AnimationEvent {
    pub fn value(&self) -> f32 {
        match self {
            AnimationEvent::Update(v) | AnimationEvent::End(v) => *v,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, AnimationEvent::End(_))
    }
}

/// A tick-driven value animation
#[derive(Clone, Debug)]
pub struct ValueAnimator {
    id: AnimationId,
    from: f32,
    to: f32,
    duration_ms: u64,
    elapsed_ms: u64,
    easing: Easing,
    phase: AnimationPhase,
}

impl ValueAnimator {
    /// Create an idle animator. Durations shorter than 1 ms are raised to 1 ms.
    pub fn new(id: AnimationId, from: f32, to: f32, duration_ms: u64) -> Self {
        Self {
            id,
            from,
            to,
            duration_ms: duration_ms.max(1),
            elapsed_ms: 0,
            easing: Easing::default(),
            phase: AnimationPhase::Idle,
        }
    }

    /// Set the interpolation curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == AnimationPhase::Running
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Linear time fraction (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        (self.elapsed_ms as f64 / self.duration_ms as f64).min(1.0) as f32
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.fraction());
        self.from + (self.to - self.from) * eased
    }

    /// Start the animation, returning its initial value.
    ///
    /// Restarting a running animator rewinds it. Returns `None` when the
    /// animator has already finished or been canceled.
    pub fn start(&mut self) -> Option<f32> {
        match self.phase {
            AnimationPhase::Idle | AnimationPhase::Running => {
                self.elapsed_ms = 0;
                self.phase = AnimationPhase::Running;
                tracing::trace!(id = %self.id, from = self.from, to = self.to, duration_ms = self.duration_ms, "animator started");
                Some(self.from)
            }
            AnimationPhase::Finished | AnimationPhase::Canceled => None,
        }
    }

    /// Advance by `dt_ms` milliseconds.
    ///
    /// Returns `None` unless the animator is running.
    pub fn tick(&mut self, dt_ms: u64) -> Option<AnimationEvent> {
        if self.phase != AnimationPhase::Running {
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.duration_ms);

        if self.elapsed_ms >= self.duration_ms {
            self.phase = AnimationPhase::Finished;
            tracing::trace!(id = %self.id, "animator finished");
            Some(AnimationEvent::End(self.to))
        } else {
            Some(AnimationEvent::Update(self.value()))
        }
    }

    /// Stop the animation where it is.
    ///
    /// Idempotent: returns `true` only when this call stopped a running
    /// animator.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            AnimationPhase::Idle | AnimationPhase::Running => {
                self.phase = AnimationPhase::Canceled;
                tracing::trace!(id = %self.id, elapsed_ms = self.elapsed_ms, "animator canceled");
                true
            }
            AnimationPhase::Finished | AnimationPhase::Canceled => false,
        }
    }
}
