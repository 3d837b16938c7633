//! Shutter Widget Library
//!
//! A tap and hold camera button with FSM-driven interactions and chained,
//! cancelable animations.

pub mod camera_button;
pub mod config;
pub mod consistency;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod icons;
pub mod listeners;
pub mod orchestrator;
pub mod state;

pub use camera_button::CameraButton;
pub use config::{ButtonConfig, CollapseAction, Mode, DEFAULT_GRADIENT_ROTATION_MULTIPLIER};
pub use consistency::validate_consistency;
pub use error::{ConfigError, ConsistencyError, Result};
pub use frame::{ButtonFrame, DrawOp, LinearGradient, TileMode};
pub use icons::{IconHandle, IconPlacement, ICON_SCROLL_DURATION_MS};
pub use listeners::{HoldListener, ProgressListener, StateChangeListener, TapListener};
pub use orchestrator::{AnimationOrchestrator, Slot};
pub use state::{ButtonCore, State};
