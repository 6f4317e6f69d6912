//! The single authored level: ground, ledges, walls, dog patrols and the
//! background slideshow

use rand::Rng;

use super::dog::Dog;
use super::rect::Rect;
use crate::consts::*;

/// Elevated platforms and wall-jump walls `(x, y, w, h)`
const STRUCTURE: [(f32, f32, f32, f32); 6] = [
    (400.0, 380.0, 200.0, 20.0),
    (800.0, 300.0, 180.0, 20.0),
    (1200.0, 220.0, 220.0, 20.0),
    (1600.0, 150.0, 160.0, 20.0),
    // walls
    (950.0, HEIGHT - 200.0, 20.0, 160.0),
    (1400.0, HEIGHT - 260.0, 20.0, 220.0),
];

/// Dog patrols `(x, y, left_bound, right_bound)`
const DOG_PATROLS: [(f32, f32, f32, f32); 4] = [
    (600.0, HEIGHT - 80.0, 500.0, 700.0),
    (1100.0, HEIGHT - 80.0, 1000.0, 1300.0),
    (1900.0, HEIGHT - 80.0, 1800.0, 2000.0),
    (2600.0, HEIGHT - 80.0, 2500.0, 2800.0),
];

/// Level geometry and actors
#[derive(Debug, Clone)]
pub struct Level {
    platforms: Vec<Rect>,
    pub dogs: Vec<Dog>,
    /// World width
    pub length: f32,
    /// Slowly increasing slideshow position; truncated to pick a frame
    pub bg_index: f32,
}

impl Level {
    /// Build the level; dog headings are drawn from `rng`
    pub fn build(rng: &mut impl Rng) -> Self {
        let mut platforms = Vec::with_capacity(STRUCTURE.len() + 1);
        // Continuous ground
        platforms.push(Rect::new(
            0.0,
            HEIGHT - GROUND_HEIGHT,
            LEVEL_LENGTH,
            GROUND_HEIGHT,
        ));
        platforms.extend(STRUCTURE.iter().map(|&(x, y, w, h)| Rect::new(x, y, w, h)));

        let dogs = DOG_PATROLS
            .iter()
            .map(|&(x, y, left, right)| Dog::with_rng(x, y, left, right, rng))
            .collect();

        Self {
            platforms,
            dogs,
            length: LEVEL_LENGTH,
            bg_index: 0.0,
        }
    }

    /// Platform list; fixed once the level is built
    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    /// Player x at which the run is won
    pub fn win_x(&self) -> f32 {
        self.length - WIN_MARGIN
    }

    /// Background frame currently on screen
    pub fn background_frame(&self) -> usize {
        self.bg_index as usize % BACKGROUND_FRAMES
    }

    pub fn update(&mut self) {
        self.bg_index += BACKGROUND_RATE;
        for dog in &mut self.dogs {
            dog.update();
        }
    }
}
