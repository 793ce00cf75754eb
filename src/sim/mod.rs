//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic: fixed per-tick displacements, seeded RNG only, no
//! rendering or platform dependencies.

pub mod collision;
pub mod policy;
pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Paddle, Side};
pub use tick::{TickEvents, TickInput, tick};
