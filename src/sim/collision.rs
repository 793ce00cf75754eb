//! Collision detection and response for the court
//!
//! Flat-wall geometry: the ball reflects off the top and bottom walls and the
//! inner faces of the two paddles. A paddle bounce repositions the ball flush
//! against the face, flips and amplifies the horizontal velocity, and
//! replaces the vertical velocity with a spin term from the impact offset.

use super::state::{Ball, Paddle, Side};

/// Reflect the ball off the top/bottom walls, clamping it back into the
/// field so it cannot tunnel or stick. Returns true when a bounce occurred.
pub fn resolve_wall_bounce(ball: &mut Ball, field_height: f32) -> bool {
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > field_height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(ball.radius, field_height - ball.radius);
        true
    } else {
        false
    }
}

/// Face collision predicate for one paddle.
///
/// Horizontally only the inner face plane is tested; vertically the ball's
/// extent must overlap the paddle span.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let in_reach = match side {
        Side::Left => ball.pos.x - ball.radius < paddle.x + paddle.width,
        Side::Right => ball.pos.x + ball.radius > paddle.x,
    };
    in_reach && paddle.overlaps_ball_y(ball.pos.y, ball.radius)
}

/// Bounce the ball off a paddle face. Returns the normalized impact offset
/// (0 at the paddle center, roughly -1/+1 at the top/bottom edges).
///
/// The spin term scales with the base speed constant, not the current
/// velocity magnitude, so directional control stays consistent as rallies
/// speed up.
pub fn resolve_paddle_bounce(ball: &mut Ball, paddle: &Paddle, side: Side, boost: f32) -> f32 {
    // Flush against the face, so the same contact cannot re-trigger next tick
    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };
    ball.vel.x *= -boost;

    let hit_pos = (ball.pos.y - paddle.center_y()) / (paddle.height / 2.0);
    ball.vel.y = ball.speed * hit_pos;
    hit_pos
}
