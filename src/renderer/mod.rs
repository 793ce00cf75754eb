//! Rendering module
//!
//! The simulation draws through a small primitive sink so the actual surface
//! stays external. [`draw_frame`] is a stateless pass over the game state;
//! it never feeds anything back into the simulation.

pub mod term;

pub use term::TermSink;

use crate::sim::{GameState, Side};

/// Color token passed through to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Court palette
pub const BACKGROUND: Rgb = Rgb(0x22, 0x22, 0x22);
pub const DIVIDER: Rgb = Rgb(0xff, 0xff, 0xff);
pub const BALL: Rgb = Rgb(0xff, 0xff, 0xff);
pub const PLAYER: Rgb = Rgb(0x29, 0xb6, 0xf6);
pub const OPPONENT: Rgb = Rgb(0xff, 0x52, 0x52);

/// Center divider layout: 20-unit dashes on a 40-unit period
const DIVIDER_DASH: f32 = 20.0;
const DIVIDER_PERIOD: f32 = 40.0;
const DIVIDER_WIDTH: f32 = 2.0;

/// Score text layout
const SCORE_SIZE: f32 = 32.0;
const SCORE_Y: f32 = 40.0;
const SCORE_LEFT_OFFSET: f32 = 60.0;
const SCORE_RIGHT_OFFSET: f32 = 40.0;

pub fn side_color(side: Side) -> Rgb {
    match side {
        Side::Left => PLAYER,
        Side::Right => OPPONENT,
    }
}

/// Draw-primitive sink: the contract the external rendering surface fulfils.
/// Coordinates are field-space, origin top-left, y down.
pub trait RenderSink {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb, size_px: f32);
}

/// Render one frame: background, dashed divider, paddles, ball, scores.
pub fn draw_frame(state: &GameState, sink: &mut impl RenderSink) {
    let config = &state.config;

    sink.fill_rect(0.0, 0.0, config.field_width, config.field_height, BACKGROUND);

    let divider_x = config.field_width / 2.0 - DIVIDER_WIDTH / 2.0;
    let mut y = DIVIDER_DASH;
    while y < config.field_height {
        sink.fill_rect(divider_x, y, DIVIDER_WIDTH, DIVIDER_DASH, DIVIDER);
        y += DIVIDER_PERIOD;
    }

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side);
        sink.fill_rect(
            paddle.x,
            paddle.y,
            paddle.width,
            paddle.height,
            side_color(side),
        );
    }

    sink.fill_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius, BALL);

    sink.draw_text(
        &state.scores[Side::Left.index()].to_string(),
        config.field_width / 2.0 - SCORE_LEFT_OFFSET,
        SCORE_Y,
        PLAYER,
        SCORE_SIZE,
    );
    sink.draw_text(
        &state.scores[Side::Right.index()].to_string(),
        config.field_width / 2.0 + SCORE_RIGHT_OFFSET,
        SCORE_Y,
        OPPONENT,
        SCORE_SIZE,
    );
}
