//! Runtime game configuration
//!
//! Defaults mirror the classic court: 800x600 field, 12x80 paddles, radius-10
//! ball. Geometry is validated once at startup; the simulation itself relies
//! on clamping, not on error paths.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Side;

/// Invalid configuration detected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field must have positive dimensions, got {width}x{height}")]
    DegenerateField { width: f32, height: f32 },
    #[error("paddle height {paddle_height} must be smaller than field height {field_height}")]
    PaddleTooTall { paddle_height: f32, field_height: f32 },
    #[error("ball diameter {diameter} does not fit the field")]
    BallTooLarge { diameter: f32 },
    #[error("speeds must be positive (ball {ball_speed}, opponent step {opponent_step})")]
    NonPositiveSpeed { ball_speed: f32, opponent_step: f32 },
    #[error("serve vertical range must be positive, got {range}")]
    DegenerateServeRange { range: f32 },
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle inset from its vertical edge
    pub paddle_margin: f32,
    pub ball_radius: f32,
    /// Base ball speed in units per tick; reseeds vx on serve and scales spin
    pub ball_speed: f32,
    /// Horizontal speed multiplier applied on each paddle bounce
    pub paddle_boost: f32,
    /// Vertical serve speed is drawn from [-serve_vy_range, serve_vy_range)
    pub serve_vy_range: f32,
    /// Opponent tolerance band around the ball before it moves
    pub opponent_deadzone: f32,
    /// Opponent paddle step per tick
    pub opponent_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_BASE_SPEED,
            paddle_boost: PADDLE_BOOST,
            serve_vy_range: SERVE_VY_RANGE,
            opponent_deadzone: OPPONENT_DEADZONE,
            opponent_step: OPPONENT_STEP,
        }
    }
}

impl Config {
    /// Reject degenerate geometry before the first tick runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0) || !(self.field_height > 0.0) {
            return Err(ConfigError::DegenerateField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_height >= self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        let diameter = self.ball_radius * 2.0;
        if diameter >= self.field_height || diameter >= self.field_width {
            return Err(ConfigError::BallTooLarge { diameter });
        }
        if !(self.ball_speed > 0.0) || !(self.opponent_step > 0.0) {
            return Err(ConfigError::NonPositiveSpeed {
                ball_speed: self.ball_speed,
                opponent_step: self.opponent_step,
            });
        }
        // A zero serve range would allow the flat-trajectory deadlock the
        // serve logic exists to rule out
        if !(self.serve_vy_range > 0.0) {
            return Err(ConfigError::DegenerateServeRange {
                range: self.serve_vy_range,
            });
        }
        Ok(())
    }

    /// Fixed X of a paddle's left face
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp a paddle top edge into the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    /// Field center point
    pub fn center(&self) -> (f32, f32) {
        (self.field_width / 2.0, self.field_height / 2.0)
    }
}
