//! Game state, entities, and the phase state machine
//!
//! All session state lives in one owned `GameState`; the platform layer holds
//! it and every mutation goes through the transition methods or the tick.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start prompt over the splash background, waiting for a click
    Splash,
    /// Free movement around the plaza
    Explore,
    /// Timed toy-catching at the booth
    MiniGame,
    /// Final score panel with go-back / play-again buttons
    Result,
}

/// Which way the player sprite faces (chosen from horizontal movement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Idle,
    Left,
    Right,
}

impl Facing {
    /// Image registry key for this facing's player sprite
    pub fn sprite_key(self) -> &'static str {
        match self {
            Facing::Idle => "player_idle",
            Facing::Left => "player_left",
            Facing::Right => "player_right",
        }
    }
}

/// Toy variants, tagging each falling collectible with its sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToyKind {
    Teddy,
    Robot,
    Duck,
}

impl ToyKind {
    pub const COUNT: u32 = 3;

    pub fn from_index(i: u32) -> Self {
        match i % Self::COUNT {
            0 => ToyKind::Teddy,
            1 => ToyKind::Robot,
            _ => ToyKind::Duck,
        }
    }

    /// Image registry key for this toy's sprite
    pub fn sprite_key(self) -> &'static str {
        match self {
            ToyKind::Teddy => "toy_teddy",
            ToyKind::Robot => "toy_robot",
            ToyKind::Duck => "toy_duck",
        }
    }
}

/// The player character. Single persistent instance for the session.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left of the bounding box, logical coordinates
    pub pos: Vec2,
    pub facing: Facing,
}

impl Player {
    fn new() -> Self {
        Self {
            pos: Vec2::new(EXPLORE_START_X, EXPLORE_START_Y),
            facing: Facing::Idle,
        }
    }

    /// Phase-adjusted collision rectangle.
    ///
    /// Explore uses the nominal box. The mini-game draws the sprite at 1.3x
    /// scale, so its hitbox is the scaled box with a top inset to keep
    /// catches on the body.
    pub fn hitbox(&self, phase: Phase) -> Rect {
        match phase {
            Phase::MiniGame => Rect::new(
                self.pos.x,
                self.pos.y + MINIGAME_HITBOX_TOP_INSET,
                PLAYER_W * MINIGAME_PLAYER_SCALE,
                PLAYER_H * MINIGAME_PLAYER_SCALE - MINIGAME_HITBOX_TOP_INSET,
            ),
            _ => Rect::new(self.pos.x, self.pos.y, PLAYER_W, PLAYER_H),
        }
    }
}

/// A falling toy. Never destroyed: consumption relocates it past the bottom
/// edge, and the respawn pass resets it above the top edge, so the batch
/// count stays constant for the whole mini-game run.
#[derive(Debug, Clone)]
pub struct Toy {
    pub pos: Vec2,
    /// Fall speed, units per second
    pub speed: f32,
    pub kind: ToyKind,
}

impl Toy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, TOY_SIZE, TOY_SIZE)
    }

    /// Whether the toy has left the play space through the bottom edge
    /// (either by falling or by being consumed).
    pub fn past_bottom(&self) -> bool {
        self.pos.y > LOGICAL_H
    }
}

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub player: Player,
    /// Mini-game entry trigger zone, immutable after init
    pub gate: Rect,
    /// Toy batch; empty outside MiniGame/Result, exactly `TOY_BATCH` inside
    pub toys: Vec<Toy>,
    /// Catches this run; only mutated during MiniGame
    pub score: u32,
    /// Whole seconds remaining on the countdown
    pub time_left: u32,
    /// Whether the countdown is running (one per mini-game run)
    pub timer_active: bool,
    /// Whether the splash screen has been acknowledged and its delay armed
    splash_armed: bool,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session, starting at the splash screen.
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Splash,
            player: Player::new(),
            gate: GATE,
            toys: Vec::with_capacity(TOY_BATCH),
            score: 0,
            time_left: MINIGAME_DURATION_SECS,
            timer_active: false,
            splash_armed: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Acknowledge the start prompt. Returns true the first time only, so
    /// the platform schedules at most one splash timeout; repeat clicks and
    /// clicks outside Splash return false.
    pub fn acknowledge_splash(&mut self) -> bool {
        if self.phase == Phase::Splash && !self.splash_armed {
            self.splash_armed = true;
            true
        } else {
            false
        }
    }

    /// Whether the splash delay is armed (the prompt was acknowledged and
    /// exploration starts shortly). Read by the splash overlay.
    pub fn splash_armed(&self) -> bool {
        self.splash_armed
    }

    /// Leave the splash screen once the armed delay fires.
    pub fn begin_explore(&mut self) {
        if self.phase == Phase::Splash {
            self.phase = Phase::Explore;
            self.splash_armed = false;
        }
    }

    /// Start a mini-game run: reset score and countdown, repopulate the toy
    /// batch, and move the player to the booth. A no-op while a run is
    /// already in progress.
    pub fn enter_minigame(&mut self) {
        if self.phase == Phase::MiniGame {
            return;
        }
        self.phase = Phase::MiniGame;
        self.score = 0;
        self.time_left = MINIGAME_DURATION_SECS;
        self.timer_active = true;
        self.player.pos = Vec2::new(MINIGAME_START_X, MINIGAME_FLOOR_Y);
        self.player.facing = Facing::Idle;
        self.toys.clear();
        for _ in 0..TOY_BATCH {
            let toy = self.spawn_toy();
            self.toys.push(toy);
        }
    }

    /// One wall-clock second of countdown. Driven by the platform's 1 s
    /// interval, not the frame loop. At zero the timer deactivates and the
    /// phase moves to Result exactly once.
    pub fn countdown_tick(&mut self) {
        if self.phase != Phase::MiniGame || !self.timer_active {
            return;
        }
        self.time_left -= 1;
        if self.time_left == 0 {
            self.timer_active = false;
            self.phase = Phase::Result;
        }
    }

    /// Leave the result panel and resume exploring from the start point.
    pub fn return_to_explore(&mut self) {
        if self.phase == Phase::Result {
            self.phase = Phase::Explore;
            self.player.pos = Vec2::new(EXPLORE_START_X, EXPLORE_START_Y);
            self.player.facing = Facing::Idle;
        }
    }

    /// Roll a fresh toy above the top edge: random x across the canvas,
    /// random height in the respawn band, random speed and kind.
    fn spawn_toy(&mut self) -> Toy {
        Toy {
            pos: Vec2::new(
                self.rng.random_range(0.0..LOGICAL_W - TOY_SIZE),
                self.rng.random_range(TOY_RESPAWN_Y_MIN..TOY_RESPAWN_Y_MAX),
            ),
            speed: self.rng.random_range(TOY_SPEED_MIN..TOY_SPEED_MAX),
            kind: ToyKind::from_index(self.rng.random_range(0..ToyKind::COUNT)),
        }
    }

    /// Reset a toy that left through the bottom edge (fallen or caught):
    /// new random x, new height above the top, fresh speed. Kind is kept.
    pub fn respawn_toy(&mut self, index: usize) {
        let fresh = self.spawn_toy();
        let toy = &mut self.toys[index];
        toy.pos = fresh.pos;
        toy.speed = fresh.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_splash() {
        let state = GameState::new(7);
        assert_eq!(state.phase, Phase::Splash);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, MINIGAME_DURATION_SECS);
        assert!(!state.timer_active);
        assert!(state.toys.is_empty());
        assert_eq!(
            state.player.pos,
            Vec2::new(EXPLORE_START_X, EXPLORE_START_Y)
        );
    }

    #[test]
    fn test_acknowledge_splash_arms_once() {
        let mut state = GameState::new(7);
        assert!(state.acknowledge_splash());
        // Spam clicks must not arm a second timeout
        assert!(!state.acknowledge_splash());
        state.begin_explore();
        assert_eq!(state.phase, Phase::Explore);
        // Once out of Splash neither call does anything
        assert!(!state.acknowledge_splash());
        state.begin_explore();
        assert_eq!(state.phase, Phase::Explore);
    }

    #[test]
    fn test_enter_minigame_resets_run_state() {
        let mut state = GameState::new(7);
        state.phase = Phase::Explore;
        // Leftovers from a pretend earlier run
        state.score = 42;
        state.time_left = 3;
        state.player.pos = Vec2::new(10.0, 10.0);

        state.enter_minigame();

        assert_eq!(state.phase, Phase::MiniGame);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, MINIGAME_DURATION_SECS);
        assert!(state.timer_active);
        assert_eq!(state.toys.len(), TOY_BATCH);
        assert_eq!(
            state.player.pos,
            Vec2::new(MINIGAME_START_X, MINIGAME_FLOOR_Y)
        );
        assert_eq!(state.player.facing, Facing::Idle);
    }

    #[test]
    fn test_enter_minigame_is_noop_while_running() {
        let mut state = GameState::new(7);
        state.phase = Phase::Explore;
        state.enter_minigame();
        state.score = 5;
        state.time_left = 20;
        let toys_before: Vec<Vec2> = state.toys.iter().map(|t| t.pos).collect();

        state.enter_minigame();

        assert_eq!(state.phase, Phase::MiniGame);
        assert_eq!(state.score, 5);
        assert_eq!(state.time_left, 20);
        let toys_after: Vec<Vec2> = state.toys.iter().map(|t| t.pos).collect();
        assert_eq!(toys_before, toys_after);
    }

    #[test]
    fn test_countdown_reaches_zero_exactly_once() {
        let mut state = GameState::new(7);
        state.phase = Phase::Explore;
        state.enter_minigame();

        let mut result_transitions = 0;
        for _ in 0..MINIGAME_DURATION_SECS {
            let before = state.phase;
            state.countdown_tick();
            if before == Phase::MiniGame && state.phase == Phase::Result {
                result_transitions += 1;
            }
        }
        assert_eq!(state.time_left, 0);
        assert!(!state.timer_active);
        assert_eq!(state.phase, Phase::Result);
        assert_eq!(result_transitions, 1);

        // Stray interval fires after the run must not wrap or re-trigger
        state.countdown_tick();
        assert_eq!(state.time_left, 0);
        assert_eq!(state.phase, Phase::Result);
    }

    #[test]
    fn test_second_run_counts_down_at_single_speed() {
        let mut state = GameState::new(7);
        state.phase = Phase::Explore;
        state.enter_minigame();
        for _ in 0..MINIGAME_DURATION_SECS {
            state.countdown_tick();
        }
        assert_eq!(state.phase, Phase::Result);

        // Play again straight from the result panel
        state.enter_minigame();
        assert_eq!(state.time_left, MINIGAME_DURATION_SECS);
        state.countdown_tick();
        assert_eq!(state.time_left, MINIGAME_DURATION_SECS - 1);
    }

    #[test]
    fn test_return_to_explore_resets_player() {
        let mut state = GameState::new(7);
        state.phase = Phase::Explore;
        state.enter_minigame();
        for _ in 0..MINIGAME_DURATION_SECS {
            state.countdown_tick();
        }

        state.return_to_explore();
        assert_eq!(state.phase, Phase::Explore);
        assert_eq!(
            state.player.pos,
            Vec2::new(EXPLORE_START_X, EXPLORE_START_Y)
        );

        // Only meaningful from Result
        state.return_to_explore();
        assert_eq!(state.phase, Phase::Explore);
    }

    #[test]
    fn test_spawned_toys_land_in_configured_ranges() {
        let mut state = GameState::new(99);
        state.phase = Phase::Explore;
        state.enter_minigame();
        for toy in &state.toys {
            assert!(toy.pos.x >= 0.0 && toy.pos.x < LOGICAL_W - TOY_SIZE);
            assert!(toy.pos.y >= TOY_RESPAWN_Y_MIN && toy.pos.y < TOY_RESPAWN_Y_MAX);
            assert!(toy.speed >= TOY_SPEED_MIN && toy.speed < TOY_SPEED_MAX);
        }
    }

    #[test]
    fn test_respawn_keeps_kind_and_rerolls_motion() {
        let mut state = GameState::new(99);
        state.phase = Phase::Explore;
        state.enter_minigame();
        let kind = state.toys[0].kind;
        state.toys[0].pos.y = LOGICAL_H + 1.0;

        state.respawn_toy(0);
        let toy = &state.toys[0];
        assert_eq!(toy.kind, kind);
        assert!(toy.pos.y < 0.0);
        assert!(toy.speed >= TOY_SPEED_MIN && toy.speed < TOY_SPEED_MAX);
    }

    #[test]
    fn test_sprite_key_dispatch() {
        assert_eq!(ToyKind::Teddy.sprite_key(), "toy_teddy");
        assert_eq!(ToyKind::Robot.sprite_key(), "toy_robot");
        assert_eq!(ToyKind::Duck.sprite_key(), "toy_duck");
        assert_eq!(ToyKind::from_index(0), ToyKind::Teddy);
        assert_eq!(ToyKind::from_index(4), ToyKind::Robot);
        assert_eq!(Facing::Idle.sprite_key(), "player_idle");
        assert_eq!(Facing::Left.sprite_key(), "player_left");
        assert_eq!(Facing::Right.sprite_key(), "player_right");
    }
}
