//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here, including the seeded RNG,
//! so a snapshot of `GameState` captures a run completely.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Player/paddle side. `Left` is the human seat, `Right` the scripted opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into per-side arrays (scores, paddles)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// A paddle pinned to one vertical edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Fixed X of the left face
    pub x: f32,
    /// Top edge; the only mutable coordinate
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Does the ball's vertical extent overlap this paddle's span?
    pub fn overlaps_ball_y(&self, ball_y: f32, radius: f32) -> bool {
        ball_y + radius > self.y && ball_y - radius < self.y + self.height
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Base speed reference: reseeds vx on serve and scales spin on paddle
    /// hits. `vel` may exceed it through bounce amplification.
    pub speed: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Both paddles, indexed by [`Side::index`]
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Points per side; never reset within a session
    pub scores: [u32; 2],
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh game: paddles centered, first serve dealt.
    pub fn new(config: Config, seed: u64) -> Self {
        let paddle_y = (config.field_height - config.paddle_height) / 2.0;
        let (cx, cy) = config.center();
        let mut state = Self {
            paddles: [
                Paddle::new(
                    config.paddle_x(Side::Left),
                    paddle_y,
                    config.paddle_width,
                    config.paddle_height,
                ),
                Paddle::new(
                    config.paddle_x(Side::Right),
                    paddle_y,
                    config.paddle_width,
                    config.paddle_height,
                ),
            ],
            ball: Ball {
                pos: Vec2::new(cx, cy),
                vel: Vec2::ZERO,
                radius: config.ball_radius,
                speed: config.ball_speed,
            },
            scores: [0, 0],
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            config,
        };
        state.reset_ball();
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    /// Re-center the ball and deal a fresh serve velocity.
    ///
    /// Horizontal direction is a fair coin at full base speed. Vertical speed
    /// is uniform in [-serve_vy_range, serve_vy_range); an exact-zero draw is
    /// bumped to the full range so a serve is never perfectly flat.
    pub fn reset_ball(&mut self) {
        let (cx, cy) = self.config.center();
        self.ball.pos = Vec2::new(cx, cy);

        let sign = if self.rng.random::<bool>() { 1.0 } else { -1.0 };
        self.ball.vel.x = self.ball.speed * sign;

        let range = self.config.serve_vy_range;
        let mut vy = self.rng.random_range(-range..range);
        if vy == 0.0 {
            vy = range;
        }
        self.ball.vel.y = vy;
    }

    /// Record a point for `side` and deal the next serve.
    pub fn award_point(&mut self, side: Side) {
        self.scores[side.index()] += 1;
        log::info!(
            "point to {side:?}, score {} - {}",
            self.scores[0],
            self.scores[1]
        );
        self.reset_ball();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_centers_everything() {
        let state = GameState::new(Config::default(), 7);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.paddle(Side::Left).y, 260.0);
        assert_eq!(state.paddle(Side::Right).y, 260.0);
        assert_eq!(state.scores, [0, 0]);
    }

    #[test]
    fn serve_is_never_flat() {
        for seed in 0..64 {
            let mut state = GameState::new(Config::default(), seed);
            state.reset_ball();
            assert_eq!(state.ball.vel.x.abs(), state.ball.speed);
            assert!(state.ball.vel.y != 0.0, "flat serve from seed {seed}");
            assert!(state.ball.vel.y.abs() <= state.config.serve_vy_range);
        }
    }

    #[test]
    fn same_seed_same_serve() {
        let a = GameState::new(Config::default(), 1234);
        let b = GameState::new(Config::default(), 1234);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn award_point_resets_ball() {
        let mut state = GameState::new(Config::default(), 9);
        state.ball.pos = Vec2::new(-20.0, 100.0);
        state.award_point(Side::Right);
        assert_eq!(state.scores, [0, 1]);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.x.abs(), state.ball.speed);
    }

    #[test]
    fn paddle_ball_overlap_extents() {
        let paddle = Paddle::new(10.0, 260.0, 12.0, 80.0);
        // Grazing contact at both ends of the span
        assert!(paddle.overlaps_ball_y(255.0, 10.0));
        assert!(paddle.overlaps_ball_y(345.0, 10.0));
        // Clear misses
        assert!(!paddle.overlaps_ball_y(240.0, 10.0));
        assert!(!paddle.overlaps_ball_y(360.0, 10.0));
    }
}
