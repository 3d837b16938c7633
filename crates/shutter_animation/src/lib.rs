//! Shutter Animation System
//!
//! Tick-driven animation primitives for widgets that are driven by an
//! external clock.
//!
//! # Features
//!
//! - **Value Animators**: `{phase, elapsed, duration, curve}` descriptors advanced by `tick`
//! - **Easing**: Platform-style interpolation curves
//! - **Delayed Messages**: A single cancelable continuation that fires after a delay
//! - **Cancelable**: Cancellation is synchronous and idempotent; a canceled
//!   animator never reports completion

pub mod animator;
pub mod easing;
pub mod scheduler;

pub use animator::{AnimationEvent, AnimationId, AnimationIds, AnimationPhase, ValueAnimator};
pub use easing::Easing;
pub use scheduler::ScheduledMessage;
