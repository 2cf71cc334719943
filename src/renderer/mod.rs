//! Frame rendering
//!
//! One fully redrawn frame per call: background, net, paddles, ball,
//! scores. A pure read of the game state; all drawing goes through
//! [`DrawSurface`], so the pass itself has no platform dependencies and is
//! testable with a recording double.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::GameState;

/// Palette (CSS color strings, handed straight to the surface)
pub const BACKGROUND: &str = "#222";
pub const FOREGROUND: &str = "#fff";
pub const PLAYER_SCORE_COLOR: &str = "#0ff";
pub const OPPONENT_SCORE_COLOR: &str = "#ff0";

/// Net geometry: segment height, vertical interval, line width
const NET_SEGMENT: f32 = 20.0;
const NET_INTERVAL: f32 = 32.0;
const NET_WIDTH: f32 = 4.0;

/// Score text baseline
const SCORE_Y: f32 = 60.0;

/// Host drawing context: the three fill primitives the game needs
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);
}

/// Draw one frame of the current state
pub fn draw_frame<S: DrawSurface>(state: &GameState, surface: &mut S) {
    let arena = &state.arena;

    surface.fill_rect(0.0, 0.0, arena.width, arena.height, BACKGROUND);

    // Dashed center net
    let net_x = arena.width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < arena.height {
        surface.fill_rect(net_x, y, NET_WIDTH, NET_SEGMENT, FOREGROUND);
        y += NET_INTERVAL;
    }

    for paddle in [&state.player, &state.opponent] {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, FOREGROUND);
    }

    surface.fill_circle(
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.radius,
        FOREGROUND,
    );

    surface.fill_text(
        &state.score.player.to_string(),
        arena.width / 4.0,
        SCORE_Y,
        PLAYER_SCORE_COLOR,
    );
    surface.fill_text(
        &state.score.opponent.to_string(),
        3.0 * arena.width / 4.0,
        SCORE_Y,
        OPPONENT_SCORE_COLOR,
    );
}
