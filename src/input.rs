//! Pointer input adapter
//!
//! Maps raw pointer vertical samples (field space, measured from the top
//! edge) to a target top edge for the human paddle. Samples are
//! last-value-wins: the front end writes them as they arrive and the tick
//! reads whatever is latest, with no queueing.

use crate::config::Config;

/// Map a pointer y sample to a paddle target top edge, centering the paddle
/// on the pointer and keeping it inside the field.
pub fn pointer_to_target_y(pointer_y: f32, config: &Config) -> f32 {
    (pointer_y - config.paddle_height / 2.0)
        .clamp(0.0, config.field_height - config.paddle_height)
}

/// Last-value-wins pointer signal
#[derive(Debug, Default, Clone, Copy)]
pub struct Pointer {
    last_y: Option<f32>,
}

impl Pointer {
    /// Record a new vertical sample, replacing any previous one.
    pub fn sample(&mut self, y: f32) {
        self.last_y = Some(y);
    }

    /// Latest sample mapped to a paddle target, if any has arrived yet.
    pub fn target_y(&self, config: &Config) -> Option<f32> {
        self.last_y.map(|y| pointer_to_target_y(y, config))
    }
}
