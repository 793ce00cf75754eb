//! Fixed-cadence frame driver
//!
//! The simulation is not time-delta aware: each call to `tick` moves the
//! ball by exactly one velocity step. The driver owns wall-clock pacing,
//! catching up with at most [`MAX_CATCHUP_STEPS`] steps when the host
//! stalls and dropping the rest of the backlog.

use std::time::{Duration, Instant};

use crate::consts::MAX_CATCHUP_STEPS;

/// Invoke `frame` at a fixed cadence until it returns false.
///
/// `frame` performs one full step (update + render) per call.
pub fn run_loop(hz: f32, mut frame: impl FnMut() -> bool) {
    let step = 1.0 / hz;
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        // Cap the carried debt so a long stall cannot snowball
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut steps = 0;
        while accumulator >= step && steps < MAX_CATCHUP_STEPS {
            if !frame() {
                return;
            }
            accumulator -= step;
            steps += 1;
        }
        if steps == MAX_CATCHUP_STEPS {
            log::warn!("frame driver saturated, dropping {accumulator:.3}s of backlog");
            accumulator = 0.0;
        }

        let wait = (step - accumulator).max(0.0);
        if wait > 0.0 {
            std::thread::sleep(Duration::from_secs_f32(wait));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_when_the_frame_says_so() {
        let mut calls = 0;
        run_loop(1_000.0, || {
            calls += 1;
            calls < 5
        });
        assert_eq!(calls, 5);
    }
}
