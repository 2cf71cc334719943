//! Pointer input mapping
//!
//! Converts a surface-local pointer y into a player paddle top edge. The
//! wasm shell translates viewport coordinates through the canvas bounding
//! rect before calling in; samples outside the canvas are covered by the
//! clamp. No smoothing - the paddle reflects the latest sample directly.

use super::state::{Arena, Paddle};

/// Paddle top edge that centers the paddle on the pointer, clamped to bounds
pub fn player_target_y(pointer_y: f32, paddle: &Paddle, arena: &Arena) -> f32 {
    (pointer_y - paddle.height / 2.0).clamp(0.0, arena.height - paddle.height)
}
