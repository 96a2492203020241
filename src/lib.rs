//! Toyfall - a single-screen toy-festival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phases, entities, collision, per-frame tick)
//! - `input`: Logical actions and the held-key set
//! - `viewport`: Logical-to-window scaling with letterboxing
//! - `assets`: Asset manifest and browser image loading
//! - `renderer`: Canvas2D presentation (wasm only)
//! - `audio`: Looped background music (wasm only)

pub mod assets;
pub mod input;
pub mod sim;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use input::{Action, InputState};
pub use sim::{GameState, Phase, Rect, tick};
pub use viewport::ViewTransform;

/// Game configuration constants
pub mod consts {
    use crate::sim::Rect;

    /// Logical canvas resolution (all gameplay coordinates live in this space)
    pub const LOGICAL_W: f32 = 1920.0;
    pub const LOGICAL_H: f32 = 1080.0;

    /// Player bounding box (top-left anchored)
    pub const PLAYER_W: f32 = 140.0;
    pub const PLAYER_H: f32 = 180.0;
    /// Player movement speed, logical units per second
    pub const PLAYER_SPEED: f32 = 400.0;

    /// Where the player stands when exploration begins
    pub const EXPLORE_START_X: f32 = 890.0;
    pub const EXPLORE_START_Y: f32 = 620.0;

    /// Mini-game countdown duration in whole seconds
    pub const MINIGAME_DURATION_SECS: u32 = 50;
    /// Delay between acknowledging the splash screen and exploration starting
    pub const SPLASH_DELAY_MS: i32 = 3000;

    /// The mini-game sprite is drawn larger than the explore sprite
    pub const MINIGAME_PLAYER_SCALE: f32 = 1.3;
    /// Top inset of the mini-game hitbox so toys land on the body, not the hair
    pub const MINIGAME_HITBOX_TOP_INSET: f32 = 40.0;
    /// Player's fixed vertical position on the booth floor
    pub const MINIGAME_FLOOR_Y: f32 = LOGICAL_H - PLAYER_H * MINIGAME_PLAYER_SCALE;
    /// Where the player starts each mini-game run
    pub const MINIGAME_START_X: f32 = (LOGICAL_W - PLAYER_W * MINIGAME_PLAYER_SCALE) / 2.0;

    /// Falling toys
    pub const TOY_BATCH: usize = 6;
    pub const TOY_SIZE: f32 = 150.0;
    /// Fall speed range, units per second (max exclusive)
    pub const TOY_SPEED_MIN: f32 = 200.0;
    pub const TOY_SPEED_MAX: f32 = 300.0;
    /// Respawn band above the top edge (negative y)
    pub const TOY_RESPAWN_Y_MIN: f32 = -600.0;
    pub const TOY_RESPAWN_Y_MAX: f32 = -TOY_SIZE;

    /// The gate zone on the plaza that starts the mini-game
    pub const GATE: Rect = Rect::new(1520.0, 440.0, 180.0, 280.0);

    /// Largest frame step fed to the update engine (stall/tab-switch guard)
    pub const MAX_FRAME_DT: f32 = 0.05;
    /// Window margin kept around the scaled canvas, CSS pixels
    pub const VIEW_MARGIN: f32 = 20.0;

    /// Result panel layout (logical coordinates, consumed by rendering and
    /// by pointer hit tests)
    pub const RESULT_PANEL: Rect = Rect::new(560.0, 290.0, 800.0, 500.0);
    pub const RESULT_BACK_BUTTON: Rect = Rect::new(640.0, 640.0, 280.0, 90.0);
    pub const RESULT_AGAIN_BUTTON: Rect = Rect::new(1000.0, 640.0, 280.0, 90.0);
}
