//! Opponent paddle policy
//!
//! A bang-bang tracker with a hysteresis band: step toward the ball at a
//! fixed rate when the paddle center drifts outside the deadzone, hold
//! otherwise. Intentionally imperfect; the fixed step is what lets a
//! well-aimed fast ball win the point, so the deadzone and step constants
//! are the game's difficulty signature.

use super::state::{Ball, Paddle};

/// Advance the opponent paddle one tick toward the ball.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, deadzone: f32, step: f32, field_height: f32) {
    let center = paddle.center_y();
    if center < ball.pos.y - deadzone {
        paddle.y += step;
    } else if center > ball.pos.y + deadzone {
        paddle.y -= step;
    }
    paddle.y = paddle.y.clamp(0.0, field_height - paddle.height);
}
