//! Ball/paddle collision detection and response
//!
//! The ball is treated as an axis-aligned box of side `2 * radius` for the
//! overlap test; the response maps contact height to a return angle, so a
//! shot can be aimed by where it strikes the paddle.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Overlap test between the ball's bounding box and a paddle rectangle
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - ball.radius < paddle.x + paddle.width
        && ball.pos.x + ball.radius > paddle.x
        && ball.pos.y + ball.radius > paddle.y
        && ball.pos.y - ball.radius < paddle.y + paddle.height
}

/// Normalized contact offset from the paddle center: -1 at the top edge,
/// 0 at the center, +1 at the bottom edge
pub fn collide_point(ball_y: f32, paddle: &Paddle) -> f32 {
    ((ball_y - paddle.center_y()) / (paddle.height / 2.0)).clamp(-1.0, 1.0)
}

/// Outgoing velocity after a paddle hit
///
/// `dir` is the sign of the outgoing horizontal direction (+1 off the
/// player paddle, -1 off the opponent). The horizontal component is
/// `speed * cos(angle)`, so edge hits come off slower horizontally in
/// exchange for the steeper angle.
pub fn bounce_velocity(ball: &Ball, paddle: &Paddle, dir: f32) -> Vec2 {
    let angle = collide_point(ball.pos.y, paddle) * MAX_BOUNCE_ANGLE;
    Vec2::new(dir * ball.speed * angle.cos(), ball.speed * angle.sin())
}
