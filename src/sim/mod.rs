//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only, owned by the game state
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod state;
pub mod step;

pub use ai::track_ball;
pub use collision::{ball_paddle_overlap, bounce_velocity, collide_point};
pub use input::player_target_y;
pub use state::{Arena, Ball, GameState, Paddle, Score, Side};
pub use step::{StepEvents, step};
