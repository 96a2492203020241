//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Mutation only through transition methods and `tick`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Facing, GameState, Phase, Player, Toy, ToyKind};
pub use tick::{near_gate, tick};
