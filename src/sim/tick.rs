//! Fixed-step frame update
//!
//! Order per frame: player -> level (dogs, background) -> score -> dog
//! contact -> win line -> camera. While the run has ended only the restart
//! input is honoured.

use serde::{Deserialize, Serialize};

use super::player::PlayerInput;
use super::state::{GamePhase, GameState, Outcome};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held keys
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Restart key went down this frame
    pub restart: bool,
}

/// When a held jump key produces an impulse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpTrigger {
    /// Every frame the key is down and a contact allows it
    #[default]
    Held,
    /// Only on the frame the key goes down
    Pressed,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let GamePhase::Ended(_) = state.phase {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;

    let jump = match state.jump_trigger {
        JumpTrigger::Held => input.jump,
        JumpTrigger::Pressed => input.jump && !state.jump_was_down,
    };
    state.jump_was_down = input.jump;

    let player_input = PlayerInput {
        left: input.left,
        right: input.right,
        jump,
    };
    state.player.update(player_input, state.level.platforms());
    state.level.update();
    state.score = state.score.max(state.player.x());

    let player_rect = state.player.rect();
    if state
        .level
        .dogs()
        .iter()
        .any(|dog| dog.rect().overlaps(&player_rect))
    {
        state.end(Outcome::Lost);
    } else if state.player.x() >= state.level.win_x() {
        state.end(Outcome::Won);
    }

    state.camera.follow(state.player.x());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::body::Facing;
    use crate::sim::dog::Dog;
    use crate::sim::state::GameEvent;
    use proptest::prelude::*;

    const RIGHT: TickInput = TickInput {
        left: false,
        right: true,
        jump: false,
        restart: false,
    };
    const RESTART: TickInput = TickInput {
        left: false,
        right: false,
        jump: false,
        restart: true,
    };

    /// Park the player on the ground at `x`
    fn place_on_ground(state: &mut GameState, x: f32) {
        let body = &mut state.player.body;
        body.pos.x = x;
        body.set_bottom(HEIGHT - GROUND_HEIGHT);
        body.vel.y = 0.0;
        state.player.on_ground = true;
    }

    #[test]
    fn test_first_ticks_fall_then_walk() {
        let mut state = GameState::new(12345);
        for _ in 0..10 {
            tick(&mut state, &RIGHT);
        }
        assert!(state.is_playing());
        assert!(state.player.on_ground);
        assert_eq!(state.player.x(), PLAYER_SPAWN_X + 10.0 * PLAYER_SPEED);
        assert_eq!(state.score, state.player.x());
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_win_threshold_exact() {
        let mut state = GameState::new(1);
        place_on_ground(&mut state, LEVEL_LENGTH - WIN_MARGIN - PLAYER_SPEED);
        tick(&mut state, &RIGHT);
        assert_eq!(state.player.x(), LEVEL_LENGTH - WIN_MARGIN);
        assert_eq!(state.phase, GamePhase::Ended(Outcome::Won));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Won {
                score: LEVEL_LENGTH - WIN_MARGIN
            }]
        );
    }

    #[test]
    fn test_one_pixel_short_does_not_win() {
        let mut state = GameState::new(1);
        place_on_ground(&mut state, LEVEL_LENGTH - WIN_MARGIN - 1.0 - PLAYER_SPEED);
        tick(&mut state, &RIGHT);
        assert_eq!(state.player.x(), LEVEL_LENGTH - WIN_MARGIN - 1.0);
        assert!(state.is_playing());
    }

    #[test]
    fn test_touching_dog_loses() {
        let mut state = GameState::new(1);
        let dog_x = state.level.dogs()[0].body.pos.x;
        place_on_ground(&mut state, dog_x);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.outcome(), Some(Outcome::Lost));
        assert!(matches!(state.drain_events()[..], [GameEvent::Lost { .. }]));
    }

    #[test]
    fn test_loss_beats_win_on_same_frame() {
        let mut state = GameState::new(1);
        let win_x = state.level.win_x();
        state
            .level
            .dogs
            .push(Dog::new(win_x - 10.0, HEIGHT - 80.0, win_x - 100.0, win_x + 100.0, Facing::Right));
        place_on_ground(&mut state, win_x - PLAYER_SPEED);
        tick(&mut state, &RIGHT);
        assert_eq!(state.player.x(), win_x);
        assert_eq!(state.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn test_ended_state_is_frozen() {
        let mut state = GameState::new(1);
        let win_x = state.level.win_x();
        place_on_ground(&mut state, win_x);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.outcome(), Some(Outcome::Won));

        let frozen_x = state.player.x();
        let frozen_camera = state.camera;
        let frozen_dog = state.level.dogs()[0].body.pos;
        let ticks = state.time_ticks;
        for _ in 0..30 {
            tick(&mut state, &RIGHT);
        }
        assert_eq!(state.player.x(), frozen_x);
        assert_eq!(state.camera, frozen_camera);
        assert_eq!(state.level.dogs()[0].body.pos, frozen_dog);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_restart_only_while_ended() {
        let mut state = GameState::new(1);
        for _ in 0..20 {
            tick(&mut state, &RIGHT);
        }
        let x = state.player.x();
        tick(&mut state, &RESTART);
        assert!(state.player.x() >= x, "restart ignored while playing");
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(1);
        let dog_x = state.level.dogs()[1].body.pos.x;
        place_on_ground(&mut state, dog_x);
        state.camera.x = 700.0;
        state.score = 1234.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.outcome(), Some(Outcome::Lost));

        tick(&mut state, &RESTART);
        assert!(state.is_playing());
        assert_eq!(state.score, 0.0);
        assert_eq!(state.camera.x, 0.0);
        assert_eq!(state.player.x(), PLAYER_SPAWN_X);
        assert_eq!(state.player.body.pos.y, PLAYER_SPAWN_Y);
        assert_eq!(state.player.body.vel, glam::Vec2::ZERO);

        let fresh: Vec<f32> = state.level.dogs().iter().map(|d| d.body.pos.x).collect();
        assert_eq!(fresh, vec![600.0, 1100.0, 1900.0, 2600.0]);
        assert_eq!(
            state.drain_events().last(),
            Some(&GameEvent::Restarted)
        );
    }

    #[test]
    fn test_camera_follows_during_play() {
        let mut state = GameState::new(1);
        for _ in 0..120 {
            tick(&mut state, &RIGHT);
            if !state.is_playing() {
                break;
            }
        }
        let rel = state.player.x() - state.camera.x;
        assert!(state.camera.x > 0.0);
        assert!(rel <= SCROLL_EDGE);
    }

    #[test]
    fn test_held_jump_refires_but_pressed_does_not() {
        for (trigger, expect_second_jump) in
            [(JumpTrigger::Held, true), (JumpTrigger::Pressed, false)]
        {
            let mut state = GameState::new(1).with_jump_trigger(trigger);
            let jump = TickInput {
                jump: true,
                ..Default::default()
            };

            place_on_ground(&mut state, 200.0);
            tick(&mut state, &jump);
            assert!(state.player.body.vel.y < 0.0, "{trigger:?}: first press jumps");

            // Back on the ground with the key still held
            place_on_ground(&mut state, 200.0);
            tick(&mut state, &jump);
            assert_eq!(
                state.player.body.vel.y < 0.0,
                expect_second_jump,
                "{trigger:?}: held key"
            );
        }
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| TickInput {
            left,
            right,
            jump,
            restart: false,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_score_never_decreases(seed in any::<u64>(), inputs in proptest::collection::vec(arb_input(), 1..300)) {
            let mut state = GameState::new(seed);
            let mut last = state.score;
            for input in &inputs {
                if !state.is_playing() {
                    break;
                }
                tick(&mut state, input);
                prop_assert!(state.score >= last);
                prop_assert!(state.score >= state.player.x() || !state.is_playing());
                last = state.score;
            }
        }
    }
}
