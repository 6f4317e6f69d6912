//! Player controller: input, gravity, axis-separated collision and pose
//!
//! One call to [`Player::update`] is one frame. Horizontal movement is
//! resolved against every platform before vertical movement, so wall and
//! floor contacts never fight each other within a frame.

use super::body::{Body, Facing};
use super::rect::Rect;
use crate::consts::*;

/// Inputs the player reacts to this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    /// Jump already filtered by the session's jump trigger
    pub jump: bool,
}

/// Visible pose, chosen after physics each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    Idle,
    /// Walk cycle frame (0..WALK_FRAMES)
    Walk(usize),
    Jump,
    Wall,
}

impl PlayerPose {
    /// (column, row) of the pose in the cat sprite sheet
    pub fn sprite_cell(self) -> (u32, u32) {
        match self {
            PlayerPose::Idle => (0, 0),
            PlayerPose::Walk(frame) => (frame as u32, 1),
            PlayerPose::Jump => (0, 2),
            PlayerPose::Wall => (0, 3),
        }
    }
}

/// The cat
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub on_ground: bool,
    pub touching_left_wall: bool,
    pub touching_right_wall: bool,
    pub facing: Facing,
    /// Walk-cycle tick counter, wraps at WALK_FRAMES * ANIM_HOLD_TICKS
    pub anim_index: usize,
    pub pose: PlayerPose,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            on_ground: false,
            touching_left_wall: false,
            touching_right_wall: false,
            facing: Facing::Right,
            anim_index: 0,
            pose: PlayerPose::Idle,
        }
    }

    /// Fresh player at the level spawn point
    pub fn spawn() -> Self {
        Self::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.body.pos.x
    }

    pub fn flip_x(&self) -> bool {
        self.facing.is_flipped()
    }

    /// Advance one frame against the given platforms
    pub fn update(&mut self, input: PlayerInput, platforms: &[Rect]) {
        self.apply_input(input);
        self.facing = Facing::from_velocity(self.body.vel.x, self.facing);
        self.apply_gravity();
        self.move_horizontal(platforms);
        self.move_vertical(platforms);
        self.animate();
    }

    fn apply_input(&mut self, input: PlayerInput) {
        let vel = &mut self.body.vel;
        vel.x = 0.0;
        if input.left {
            vel.x = -PLAYER_SPEED;
        }
        // Right wins when both are held
        if input.right {
            vel.x = PLAYER_SPEED;
        }

        if input.jump {
            if self.on_ground {
                vel.y = JUMP_POWER;
            } else if self.touching_left_wall {
                vel.x = WALL_JUMP_POWER_X;
                vel.y = WALL_JUMP_POWER_Y;
            } else if self.touching_right_wall {
                vel.x = -WALL_JUMP_POWER_X;
                vel.y = WALL_JUMP_POWER_Y;
            }
        }
    }

    fn apply_gravity(&mut self) {
        self.body.vel.y = (self.body.vel.y + GRAVITY).min(TERMINAL_VELOCITY);
    }

    fn move_horizontal(&mut self, platforms: &[Rect]) {
        let vx = self.body.vel.x;
        self.body.pos.x += vx;
        self.touching_left_wall = false;
        self.touching_right_wall = false;

        for plat in platforms {
            if !self.body.rect().overlaps(plat) {
                continue;
            }
            if vx > 0.0 {
                self.body.set_right(plat.left());
                self.touching_right_wall = true;
            } else if vx < 0.0 {
                self.body.set_left(plat.right());
                self.touching_left_wall = true;
            }
        }
    }

    fn move_vertical(&mut self, platforms: &[Rect]) {
        self.body.pos.y += self.body.vel.y;
        self.on_ground = false;

        for plat in platforms {
            if !self.body.rect().overlaps(plat) {
                continue;
            }
            // Re-read each time: a snap zeroes the velocity
            let vy = self.body.vel.y;
            if vy > 0.0 {
                self.body.set_bottom(plat.top());
                self.body.vel.y = 0.0;
                self.on_ground = true;
            } else if vy < 0.0 {
                self.body.set_top(plat.bottom());
                self.body.vel.y = 0.0;
            }
        }
    }

    fn animate(&mut self) {
        self.pose = if !self.on_ground {
            if self.touching_left_wall || self.touching_right_wall {
                PlayerPose::Wall
            } else {
                PlayerPose::Jump
            }
        } else if self.body.vel.x != 0.0 {
            self.anim_index = (self.anim_index + 1) % (WALK_FRAMES * ANIM_HOLD_TICKS);
            PlayerPose::Walk(self.anim_index / ANIM_HOLD_TICKS)
        } else {
            PlayerPose::Idle
        };
    }
}
