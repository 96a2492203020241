//! Per-frame update engine
//!
//! One entry point, `tick`, advances the simulation by a clamped frame step
//! under the current phase's rules. Ordering within a frame: movement first,
//! then collision, so the collision pass always sees this frame's positions.

use glam::Vec2;

use super::collision::Rect;
use super::state::{Facing, GameState, Phase};
use crate::consts::*;
use crate::input::InputState;

/// Advance the game by `dt` real seconds of held input.
///
/// `dt` is clamped to `MAX_FRAME_DT` so a stalled tab cannot teleport
/// entities. Splash and Result mutate nothing here; their delays and
/// countdowns belong to the phase machine and the platform timers.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    match state.phase {
        Phase::Explore => explore_tick(state, input, dt),
        Phase::MiniGame => minigame_tick(state, input, dt),
        Phase::Splash | Phase::Result => {}
    }
}

/// Free plaza movement plus the gate trigger.
fn explore_tick(state: &mut GameState, input: &InputState, dt: f32) {
    // Normalizing keeps diagonal speed equal to axial speed
    let dir = input.direction().normalize_or_zero();
    state.player.pos += dir * PLAYER_SPEED * dt;
    state.player.pos.x = state.player.pos.x.clamp(0.0, LOGICAL_W - PLAYER_W);
    state.player.pos.y = state.player.pos.y.clamp(0.0, LOGICAL_H - PLAYER_H);
    state.player.facing = facing_from(dir.x);

    if state.player.hitbox(Phase::Explore).overlaps(&state.gate) {
        state.enter_minigame();
    }
}

/// Booth movement (horizontal only), toy fall, catch, and respawn.
fn minigame_tick(state: &mut GameState, input: &InputState, dt: f32) {
    let dx = input.horizontal();
    state.player.pos.x += dx * PLAYER_SPEED * dt;
    // The mini-game sprite is scaled up, so its right-edge bound is narrower
    state.player.pos.x = state
        .player
        .pos
        .x
        .clamp(0.0, LOGICAL_W - PLAYER_W * MINIGAME_PLAYER_SCALE);
    state.player.facing = facing_from(dx);

    for toy in &mut state.toys {
        toy.pos.y += toy.speed * dt;
    }

    // Catch pass: consumption relocates the toy past the bottom edge so the
    // respawn pass below resets it, keeping the batch count constant
    let hitbox = state.player.hitbox(Phase::MiniGame);
    for toy in &mut state.toys {
        if toy.rect().overlaps(&hitbox) {
            toy.pos = Vec2::new(toy.pos.x, LOGICAL_H + TOY_SIZE);
            state.score += 1;
        }
    }

    for i in 0..state.toys.len() {
        if state.toys[i].past_bottom() {
            state.respawn_toy(i);
        }
    }
}

fn facing_from(dx: f32) -> Facing {
    if dx < 0.0 {
        Facing::Left
    } else if dx > 0.0 {
        Facing::Right
    } else {
        Facing::Idle
    }
}

/// Gate hit test helper for the explore hint overlay (is the player close
/// enough that the renderer should pulse the gate?).
pub fn near_gate(player_hitbox: &Rect, gate: &Rect) -> bool {
    let grown = Rect::new(
        gate.x - 120.0,
        gate.y - 120.0,
        gate.w + 240.0,
        gate.h + 240.0,
    );
    player_hitbox.overlaps(&grown)
}
