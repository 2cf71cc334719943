//! Opponent paddle controller
//!
//! Follows the ball at a capped speed with a dead-zone around the target.
//! The cap and the dead-zone together leave the tracker beatable on sharp
//! angled returns.

use super::state::{Arena, Paddle};
use crate::consts::{AI_DEADZONE, AI_SPEED_SCALE};

/// Move the paddle center toward the ball's vertical position
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, arena: &Arena) {
    let center = paddle.center_y();
    if center < ball_y - AI_DEADZONE {
        paddle.y += paddle.speed * AI_SPEED_SCALE;
    } else if center > ball_y + AI_DEADZONE {
        paddle.y -= paddle.speed * AI_SPEED_SCALE;
    }
    paddle.clamp_to(arena);
}
