//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (platforms and dogs in authored order)
//! - No rendering or platform dependencies

pub mod body;
pub mod camera;
pub mod dog;
pub mod level;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use body::{Body, Facing};
pub use camera::Camera;
pub use dog::Dog;
pub use level::Level;
pub use player::{Player, PlayerInput, PlayerPose};
pub use rect::{Rect, overlaps};
pub use state::{GameEvent, GamePhase, GameState, Outcome};
pub use tick::{JumpTrigger, TickInput, tick};
