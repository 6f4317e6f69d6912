//! Cat vs Dogs - a side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, patrols, camera, game state)
//! - `renderer`: Frame composition and the wgpu quad pipeline
//! - `platform`: Keyboard mapping and frame pacing
//! - `assets`: Sprite sheets and backgrounds
//! - `slicer`: Sprite-sheet slicing for the `slice-sheet` tool

pub mod assets;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod slicer;

pub use highscores::HighScores;
pub use settings::Settings;
pub use sim::JumpTrigger;

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (world pixels)
    pub const WIDTH: f32 = 960.0;
    pub const HEIGHT: f32 = 540.0;
    /// Target frame rate; one simulation tick per rendered frame
    pub const FPS: u32 = 60;

    /// Downward acceleration (px/frame²)
    pub const GRAVITY: f32 = 0.8;
    /// Maximum downward speed (px/frame)
    pub const TERMINAL_VELOCITY: f32 = 20.0;
    /// Vertical impulse of a ground jump (negative is up)
    pub const JUMP_POWER: f32 = -16.0;
    /// Wall-jump push away from the wall
    pub const WALL_JUMP_POWER_X: f32 = 10.0;
    pub const WALL_JUMP_POWER_Y: f32 = -14.0;
    /// Horizontal walking speed (px/frame)
    pub const PLAYER_SPEED: f32 = 6.0;

    /// Camera starts chasing once the player is this far right of its left edge
    pub const SCROLL_EDGE: f32 = 320.0; // WIDTH / 3

    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = HEIGHT - 100.0;

    pub const DOG_WIDTH: f32 = 50.0;
    pub const DOG_HEIGHT: f32 = 40.0;
    /// Patrol speed magnitude (px/frame)
    pub const DOG_SPEED: f32 = 2.0;

    /// Frames in a walk cycle (one sprite-sheet row)
    pub const WALK_FRAMES: usize = 6;
    /// Ticks each walk frame stays on screen
    pub const ANIM_HOLD_TICKS: usize = 6;

    /// Level width in world pixels
    pub const LEVEL_LENGTH: f32 = 4000.0;
    /// Reaching `LEVEL_LENGTH - WIN_MARGIN` wins
    pub const WIN_MARGIN: f32 = 200.0;
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Background slideshow
    pub const BACKGROUND_FRAMES: usize = 4;
    pub const BACKGROUND_RATE: f32 = 0.1;

    /// Sprite sheet grid
    pub const SHEET_COLS: u32 = 6;
    pub const SHEET_ROWS: u32 = 4;
}

/// RGBA color in 0-255 components
pub type Rgba8 = [u8; 4];

/// Named colors used by the frame composer
pub mod colors {
    use super::Rgba8;

    pub const PLATFORM: Rgba8 = [80, 80, 80, 255];
    pub const TEXT: Rgba8 = [0, 0, 0, 255];
    pub const WHITE: Rgba8 = [255, 255, 255, 255];
}
