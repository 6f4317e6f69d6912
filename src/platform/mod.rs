//! Platform layer
//!
//! Handles what the simulation must not know about:
//! - Keyboard mapping and edge detection
//! - Frame pacing

pub mod input;
pub mod pacing;

pub use input::{Action, InputState, action_for_key};
pub use pacing::FrameLimiter;
