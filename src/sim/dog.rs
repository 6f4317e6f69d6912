//! Dog patrol: pace between two x bounds at constant speed

use rand::Rng;

use super::body::{Body, Facing};
use super::rect::Rect;
use crate::consts::*;

/// A patrolling enemy
#[derive(Debug, Clone)]
pub struct Dog {
    pub body: Body,
    pub left_bound: f32,
    pub right_bound: f32,
    pub facing: Facing,
    pub anim_index: usize,
}

impl Dog {
    /// Dog heading in a fixed initial direction
    pub fn new(x: f32, y: f32, left_bound: f32, right_bound: f32, heading: Facing) -> Self {
        debug_assert!(
            right_bound - left_bound >= DOG_WIDTH,
            "patrol zone narrower than a dog"
        );
        let mut body = Body::new(x, y, DOG_WIDTH, DOG_HEIGHT);
        body.vel.x = heading.sign() * DOG_SPEED;
        Self {
            body,
            left_bound,
            right_bound,
            facing: heading,
            anim_index: 0,
        }
    }

    /// Dog whose initial heading is a coin flip
    pub fn with_rng(x: f32, y: f32, left_bound: f32, right_bound: f32, rng: &mut impl Rng) -> Self {
        let heading = if rng.random_bool(0.5) {
            Facing::Right
        } else {
            Facing::Left
        };
        Self::new(x, y, left_bound, right_bound, heading)
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    /// Walk cycle frame (0..WALK_FRAMES)
    pub fn frame(&self) -> usize {
        self.anim_index / ANIM_HOLD_TICKS
    }

    pub fn flip_x(&self) -> bool {
        self.facing.is_flipped()
    }

    pub fn update(&mut self) {
        self.body.pos.x += self.body.vel.x;

        // Keep the body inside the zone even when speed doesn't divide the
        // patrol width evenly
        if self.body.left() < self.left_bound {
            self.body.set_left(self.left_bound);
        } else if self.body.right() > self.right_bound {
            self.body.set_right(self.right_bound);
        }

        if self.body.left() <= self.left_bound || self.body.right() >= self.right_bound {
            self.body.vel.x = -self.body.vel.x;
        }

        self.facing = Facing::from_velocity(self.body.vel.x, self.facing);
        self.anim_index = (self.anim_index + 1) % (WALK_FRAMES * ANIM_HOLD_TICKS);
    }
}
