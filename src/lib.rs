//! Court Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, scoring, opponent policy)
//! - `renderer`: Draw-primitive sink contract and the per-frame draw pass
//! - `input`: Pointer-to-paddle adapter
//! - `driver`: Fixed-cadence frame loop

pub mod config;
pub mod driver;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Simulation cadence expected from the driver (steps per second)
    pub const TICK_HZ: f32 = 60.0;
    /// Maximum catch-up steps per frame to prevent spiral of death
    pub const MAX_CATCHUP_STEPS: u32 = 8;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - one per vertical edge, inset from the wall
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Base ball speed (units per tick); reseeds vx on serve and scales spin
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Horizontal speed gain per paddle bounce (uncapped)
    pub const PADDLE_BOOST: f32 = 1.08;
    /// Vertical serve speed is drawn uniformly from [-SERVE_VY_RANGE, SERVE_VY_RANGE)
    pub const SERVE_VY_RANGE: f32 = 2.0;

    /// Opponent policy: tolerance band around the ball before the paddle moves
    pub const OPPONENT_DEADZONE: f32 = 15.0;
    /// Opponent policy: fixed paddle step per tick
    pub const OPPONENT_STEP: f32 = 4.0;
}
