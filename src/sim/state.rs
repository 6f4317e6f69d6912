//! Game session state
//!
//! Everything a frame reads or writes lives here; the platform shell only
//! feeds [`TickInput`](super::tick::TickInput) and drains events.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::level::Level;
use super::player::Player;
use super::tick::JumpTrigger;

/// How a finished run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Simulation running
    Playing,
    /// Frozen until restart; outcome recorded at the moment of transition
    Ended(Outcome),
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Won { score: f32 },
    Lost { score: f32 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Drives dog headings across level rebuilds
    rng: Pcg32,
    pub player: Player,
    pub level: Level,
    pub camera: Camera,
    /// Furthest x reached this run
    pub score: f32,
    pub phase: GamePhase,
    pub jump_trigger: JumpTrigger,
    /// Jump key state last frame (for `JumpTrigger::Pressed`)
    pub(super) jump_was_down: bool,
    /// Simulation tick counter (this run)
    pub time_ticks: u64,
    /// Pending events, drained by the shell
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::build(&mut rng);
        Self {
            seed,
            rng,
            player: Player::spawn(),
            level,
            camera: Camera::default(),
            score: 0.0,
            phase: GamePhase::Playing,
            jump_trigger: JumpTrigger::default(),
            jump_was_down: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn with_jump_trigger(mut self, trigger: JumpTrigger) -> Self {
        self.jump_trigger = trigger;
        self
    }

    /// Discard player and level, start a fresh run
    pub fn restart(&mut self) {
        self.player = Player::spawn();
        self.level = Level::build(&mut self.rng);
        self.camera = Camera::default();
        self.score = 0.0;
        self.phase = GamePhase::Playing;
        self.jump_was_down = false;
        self.time_ticks = 0;
        self.events.push(GameEvent::Restarted);
        log::debug!("Level rebuilt, run restarted");
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Ended(outcome) => Some(outcome),
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Freeze the run with the given outcome
    pub(super) fn end(&mut self, outcome: Outcome) {
        self.phase = GamePhase::Ended(outcome);
        let score = self.score;
        log::debug!("Run ended: {:?} at tick {} (score {})", outcome, self.time_ticks, score);
        self.events.push(match outcome {
            Outcome::Won => GameEvent::Won { score },
            Outcome::Lost => GameEvent::Lost { score },
        });
    }
}
