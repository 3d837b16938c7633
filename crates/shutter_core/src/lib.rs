//! Shutter Core
//!
//! Foundational primitives shared by the Shutter widget crates:
//!
//! - **Touch Events**: Platform-neutral pointer events with phase, position and timestamp
//! - **State Machines**: Typed, single-threaded state holders with transition history
//! - **Geometry**: Points, sizes, rects and the square hit tests widgets use
//! - **Colors**: RGBA colors that round-trip through `#RRGGBB[AA]` strings
//!
//! # Example
//!
//! ```rust
//! use shutter_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Light {
//!     Off,
//!     On,
//! }
//!
//! let mut fsm = StateMachine::new(Light::Off);
//! let previous = fsm.transition(Light::On);
//!
//! assert_eq!(previous, Light::Off);
//! assert!(fsm.is_in(Light::On));
//! assert_eq!(fsm.history(), vec![(Light::Off, Light::On)]);
//! ```

pub mod color;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use color::{Color, ParseColorError};
pub use events::{TouchEvent, TouchPhase};
pub use fsm::StateMachine;
pub use geometry::{Point, Rect, Size};
