//! Per-tick simulation step
//!
//! Advances the court by one fixed step. Velocities are in units per tick;
//! the driver owns the cadence, the simulation never sees wall-clock time.
//! Order within a tick: apply the human paddle target, integrate the ball,
//! walls, left paddle, right paddle, scoring, opponent policy.

use super::collision;
use super::policy;
use super::state::{GameState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Target top edge for the human paddle, already mapped from the pointer.
    /// None leaves the paddle where it is.
    pub target_y: Option<f32>,
}

/// Observations produced by one tick. Derived output only; nothing here
/// feeds back into the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickEvents {
    /// Ball reflected off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball bounced off this paddle's face
    pub paddle_hit: Option<Side>,
    /// This side won the point
    pub scored: Option<Side>,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    state.time_ticks += 1;

    // The human paddle is a direct function of the latest pointer sample
    if let Some(target) = input.target_y {
        state.paddle_mut(Side::Left).y = state.config.clamp_paddle_y(target);
    }

    // Integrate ball
    state.ball.pos += state.ball.vel;

    // Top/bottom walls
    if collision::resolve_wall_bounce(&mut state.ball, state.config.field_height) {
        events.wall_bounce = true;
    }

    // Paddle faces, left before right
    for side in [Side::Left, Side::Right] {
        let paddle = *state.paddle(side);
        if collision::paddle_contact(&state.ball, &paddle, side) {
            collision::resolve_paddle_bounce(
                &mut state.ball,
                &paddle,
                side,
                state.config.paddle_boost,
            );
            events.paddle_hit = Some(side);
        }
    }

    // Scoring runs after paddle resolution; a ball that slipped past the
    // paddle zone crosses the edge and the point goes to the far side
    if state.ball.pos.x - state.ball.radius < 0.0 {
        state.award_point(Side::Right);
        events.scored = Some(Side::Right);
    }
    if state.ball.pos.x + state.ball.radius > state.config.field_width {
        state.award_point(Side::Left);
        events.scored = Some(Side::Left);
    }

    // Opponent tracks the (possibly freshly served) ball
    let ball = state.ball;
    let (deadzone, step, field_height) = (
        state.config.opponent_deadzone,
        state.config.opponent_step,
        state.config.field_height,
    );
    policy::track_ball(
        state.paddle_mut(Side::Right),
        &ball,
        deadzone,
        step,
        field_height,
    );

    events
}
