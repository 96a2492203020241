//! Logical input actions and the held-key set
//!
//! Keyboard events are translated to `Action`s at the platform boundary;
//! unrecognized keys map to `None` and never reach the simulation. The
//! update engine reads the latched set once per frame.

use std::collections::HashSet;

use glam::Vec2;

/// A directional action the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Map a `KeyboardEvent.key` string to an action. Arrow keys and WASD
    /// (either case) are recognized; everything else is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Action::Up),
            "ArrowDown" | "s" | "S" => Some(Action::Down),
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            _ => None,
        }
    }
}

/// The set of actions currently held down.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Action>,
}

impl InputState {
    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// Drop everything held. Called on window blur so keys released while
    /// the page is unfocused do not stick.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Combined direction of all held actions, un-normalized. Opposed keys
    /// cancel. Screen coordinates: +y is down.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(Action::Up) {
            dir.y -= 1.0;
        }
        if self.is_held(Action::Down) {
            dir.y += 1.0;
        }
        if self.is_held(Action::Left) {
            dir.x -= 1.0;
        }
        if self.is_held(Action::Right) {
            dir.x += 1.0;
        }
        dir
    }

    /// Horizontal component only, for the mini-game.
    pub fn horizontal(&self) -> f32 {
        self.direction().x
    }
}
