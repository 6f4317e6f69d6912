//! Dead-zone horizontal camera

use crate::consts::SCROLL_EDGE;

/// Horizontal scroll offset in world pixels, never negative
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    /// Chase the player right past `SCROLL_EDGE`, pull back left under half of it
    pub fn follow(&mut self, player_x: f32) {
        let rel = player_x - self.x;
        if rel > SCROLL_EDGE {
            self.x = player_x - SCROLL_EDGE;
        } else if rel < SCROLL_EDGE / 2.0 && self.x > 0.0 {
            self.x = (player_x - SCROLL_EDGE / 2.0).max(0.0);
        }
    }

    /// Screen x of a world x
    #[inline]
    pub fn to_screen(&self, world_x: f32) -> f32 {
        world_x - self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chases_right() {
        let mut cam = Camera::default();
        cam.follow(400.0);
        assert_eq!(cam.x, 80.0);
        assert_eq!(cam.to_screen(400.0), SCROLL_EDGE);
    }

    #[test]
    fn test_pulls_back_and_stops_at_zero() {
        let mut cam = Camera { x: 500.0 };
        cam.follow(600.0); // rel 100 < 160
        assert_eq!(cam.x, 440.0);

        cam.follow(50.0);
        assert_eq!(cam.x, 0.0);

        // Already at zero: no pull back below zero
        cam.follow(10.0);
        assert_eq!(cam.x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_dead_zone_holds_still(cam_x in 0u16..3000, rel in 160u16..=320) {
            // Whole pixels keep `player_x - camera_x` exact
            let cam_x = cam_x as f32;
            let mut cam = Camera { x: cam_x };
            cam.follow(cam_x + rel as f32);
            prop_assert_eq!(cam.x, cam_x);
        }

        #[test]
        fn prop_never_negative(start in 0.0f32..3000.0, xs in proptest::collection::vec(-100.0f32..4000.0, 1..50)) {
            let mut cam = Camera { x: start };
            for x in xs {
                cam.follow(x);
                prop_assert!(cam.x >= 0.0);
            }
        }
    }
}
