//! Frame composition
//!
//! Turns a [`GameState`] into an ordered list of draw commands in screen
//! space: background, platforms, dogs, player, then HUD text. Nothing here
//! touches the GPU, so the whole frame can be checked headless.

use crate::colors;
use crate::consts::{HEIGHT, WIDTH};
use crate::highscores::HighScores;
use crate::sim::{GameState, Outcome, Rect};
use crate::Rgba8;

/// Which sprite sheet a sprite comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    Cat,
    Dog,
}

/// Where a text position sits relative to the string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// One draw call, in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Full-screen slideshow image
    Background { frame: usize },
    /// Solid rectangle
    Rect { rect: Rect, color: Rgba8 },
    /// Sprite-sheet cell stretched over `dest`
    Sprite {
        sheet: SheetId,
        cell: (u32, u32),
        dest: Rect,
        flip_x: bool,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        scale: f32,
        anchor: Anchor,
        color: Rgba8,
    },
}

/// Pixel size of HUD glyph dots
pub const HUD_SCALE: f32 = 3.0;
pub const BANNER_SCALE: f32 = 4.0;

fn hud_text(text: String, x: f32, y: f32, scale: f32, anchor: Anchor) -> DrawCmd {
    DrawCmd::Text {
        text,
        x,
        y,
        scale,
        anchor,
        color: colors::TEXT,
    }
}

/// Build the draw list for the current frame
pub fn compose(state: &GameState, scores: &HighScores) -> Vec<DrawCmd> {
    let camera_x = state.camera.x;
    let level = &state.level;
    let mut cmds = Vec::with_capacity(level.platforms().len() + level.dogs().len() + 8);

    cmds.push(DrawCmd::Background {
        frame: level.background_frame(),
    });

    cmds.extend(level.platforms().iter().map(|plat| DrawCmd::Rect {
        rect: plat.offset_x(camera_x),
        color: colors::PLATFORM,
    }));

    cmds.extend(level.dogs().iter().map(|dog| DrawCmd::Sprite {
        sheet: SheetId::Dog,
        cell: (dog.frame() as u32, 0),
        dest: dog.rect().offset_x(camera_x),
        flip_x: dog.flip_x(),
    }));

    let player = &state.player;
    cmds.push(DrawCmd::Sprite {
        sheet: SheetId::Cat,
        cell: player.pose.sprite_cell(),
        dest: player.rect().offset_x(camera_x),
        flip_x: player.flip_x(),
    });

    let score = state.score as i64;
    cmds.push(hud_text(
        format!("SCORE : {score}"),
        10.0,
        10.0,
        HUD_SCALE,
        Anchor::TopLeft,
    ));

    if let Some(outcome) = state.outcome() {
        let cx = WIDTH / 2.0;
        let cy = HEIGHT / 2.0;
        let banner = match outcome {
            Outcome::Won => "YOU WIN!",
            Outcome::Lost => "GAME OVER",
        };
        cmds.push(hud_text(banner.to_string(), cx, cy, BANNER_SCALE, Anchor::Center));
        cmds.push(hud_text(
            "PRESS R TO RESTART".to_string(),
            cx,
            cy + 50.0,
            BANNER_SCALE,
            Anchor::Center,
        ));
        cmds.push(hud_text(
            format!("SCORE : {score}"),
            cx,
            cy + 100.0,
            BANNER_SCALE,
            Anchor::Center,
        ));
        if let Some(best) = scores.best() {
            cmds.push(hud_text(
                format!("BEST : {best}"),
                cx,
                cy + 140.0,
                HUD_SCALE,
                Anchor::Center,
            ));
        }
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layer_order() {
        let state = GameState::new(3);
        let cmds = compose(&state, &HighScores::new());
        let platforms = state.level.platforms().len();
        let dogs = state.level.dogs().len();

        assert!(matches!(cmds[0], DrawCmd::Background { frame: 0 }));
        assert!(cmds[1..=platforms]
            .iter()
            .all(|c| matches!(c, DrawCmd::Rect { color, .. } if *color == colors::PLATFORM)));
        assert!(cmds[platforms + 1..platforms + 1 + dogs]
            .iter()
            .all(|c| matches!(c, DrawCmd::Sprite { sheet: SheetId::Dog, .. })));
        assert!(matches!(
            cmds[platforms + 1 + dogs],
            DrawCmd::Sprite {
                sheet: SheetId::Cat,
                ..
            }
        ));
        assert_eq!(texts(&cmds), vec!["SCORE : 0"]);
    }

    #[test]
    fn test_world_is_shifted_by_camera() {
        let mut state = GameState::new(3);
        state.camera.x = 100.0;
        let cmds = compose(&state, &HighScores::new());
        let DrawCmd::Rect { rect, .. } = &cmds[1] else {
            panic!("expected ground rect, got {:?}", cmds[1]);
        };
        assert_eq!(rect.x, -100.0);

        let player = cmds
            .iter()
            .find_map(|c| match c {
                DrawCmd::Sprite {
                    sheet: SheetId::Cat,
                    dest,
                    ..
                } => Some(*dest),
                _ => None,
            })
            .unwrap();
        assert_eq!(player.x, state.player.x() - 100.0);
        assert_eq!(player.y, state.player.body.pos.y);
    }

    #[test]
    fn test_end_screen_uses_stored_outcome() {
        let mut state = GameState::new(3);
        let dog_x = state.level.dogs()[0].body.pos.x;
        state.player.body.pos.x = dog_x;
        state.player.body.set_bottom(state.level.platforms()[0].top());
        tick(&mut state, &TickInput::default());

        let mut scores = HighScores::new();
        scores.add_run(2500, Outcome::Won);
        let cmds = compose(&state, &scores);
        let lines = texts(&cmds);
        assert_eq!(lines[1], "GAME OVER");
        assert_eq!(lines[2], "PRESS R TO RESTART");
        assert!(lines[3].starts_with("SCORE : "));
        assert_eq!(lines[4], "BEST : 2500");
    }

    #[test]
    fn test_win_banner() {
        let mut state = GameState::new(3);
        state.player.body.pos.x = state.level.win_x();
        state.player.body.set_bottom(state.level.platforms()[0].top());
        tick(&mut state, &TickInput::default());
        let cmds = compose(&state, &HighScores::new());
        assert_eq!(texts(&cmds)[1], "YOU WIN!");
        assert_eq!(texts(&cmds).len(), 4, "no best line without finished runs");
    }
}
