//! Game state and core simulation types
//!
//! Everything here is serializable so the whole state can be snapshot as
//! JSON for debugging.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the net an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// The fixed rectangular playfield
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle: `x` is fixed per side, `y` is the top edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Maximum travel per frame
    pub speed: f32,
}

impl Paddle {
    /// Paddle for the given side, vertically centered in the arena
    pub fn new(side: Side, arena: &Arena) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Opponent => arena.width - PADDLE_WIDTH - PADDLE_MARGIN,
        };
        Self {
            x,
            y: arena.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully inside the arena; call after every mutation
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.y = self.y.clamp(0.0, arena.height - self.height);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed magnitude restored on every serve and paddle return
    pub speed: f32,
}

/// Score counters, one per side; only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let arena = Arena::default();
        let mut state = Self {
            seed,
            arena,
            player: Paddle::new(Side::Player, &arena),
            opponent: Paddle::new(Side::Opponent, &arena),
            ball: Ball {
                pos: arena.center(),
                vel: Vec2::ZERO,
                radius: BALL_RADIUS,
                speed: BALL_SPEED,
            },
            score: Score::default(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        state
    }

    /// Center the ball and serve it in a fresh random direction: full speed
    /// horizontally toward either side, vertical component anywhere up to
    /// the same magnitude
    pub fn reset_ball(&mut self) {
        self.ball.pos = self.arena.center();
        let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(
            self.ball.speed * dir,
            self.ball.speed * self.rng.random_range(-1.0..=1.0),
        );
    }

    /// Uniform draw used to perturb the opponent's returns
    pub fn jitter(&mut self) -> f32 {
        self.rng.random_range(-AI_JITTER..=AI_JITTER)
    }

    /// JSON snapshot of the full state, for the debug keybinding
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
