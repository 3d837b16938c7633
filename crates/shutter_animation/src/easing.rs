//! Easing functions for animations
//!
//! The curves match the stock platform interpolators a camera button is
//! tuned against, so a config can name them directly.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in: slow start, speeds into the target
    Accelerate,
    /// Quadratic ease-out: fast start, slows into the target
    Decelerate,
    /// Cosine ease: slow start, fast middle, slow end
    AccelerateDecelerate,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Accelerate => t * t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}
