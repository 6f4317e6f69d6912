//! Keyboard state for the game loop
//!
//! Held keys drive movement and jump; restart and quit are edge-triggered.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Game actions a key can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
    Restart,
    Quit,
}

/// Key bindings
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Action::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Action::Right),
        KeyCode::Space | KeyCode::ArrowUp => Some(Action::Jump),
        KeyCode::KeyR => Some(Action::Restart),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Held and just-pressed actions
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Action>,
    pressed: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down; repeats of an already held key are ignored
    pub fn key_down(&mut self, code: KeyCode) {
        if let Some(action) = action_for_key(code) {
            if self.held.insert(action) {
                self.pressed.insert(action);
            }
        }
    }

    pub fn key_up(&mut self, code: KeyCode) {
        if let Some(action) = action_for_key(code) {
            self.held.remove(&action);
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn quit_requested(&self) -> bool {
        self.was_pressed(Action::Quit)
    }

    /// Snapshot for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.is_held(Action::Left),
            right: self.is_held(Action::Right),
            jump: self.is_held(Action::Jump),
            restart: self.was_pressed(Action::Restart),
        }
    }

    /// Forget edges once a frame has consumed them
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Drop everything (e.g. on focus loss, when key-ups may be missed)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}
