//! Canvas Pong - classic single-screen Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, AI)
//! - `renderer`: 2D canvas rendering pass
//!
//! The simulation has no platform dependencies and takes its randomness from
//! a seeded generator, so the whole game is exercisable natively; the wasm
//! shell in `main.rs` wires it to a canvas, mouse events, and
//! `requestAnimationFrame`.

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Maximum paddle travel per frame
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Gap between each paddle and its goal line
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Ball speed magnitude (per-frame displacement, not time-scaled)
    pub const BALL_SPEED: f32 = 6.0;

    /// Tolerance band around the ball before the opponent paddle moves
    pub const AI_DEADZONE: f32 = 20.0;
    /// Opponent tracking speed as a fraction of paddle speed
    pub const AI_SPEED_SCALE: f32 = 0.85;
    /// Vertical velocity perturbation range after an opponent return
    pub const AI_JITTER: f32 = 0.5;

    /// Steepest return angle off a paddle edge (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
}
