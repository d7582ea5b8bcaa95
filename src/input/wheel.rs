//! Wheel/trackpad navigation.

use tracing::debug;

use crate::carousel::Carousel;
use crate::constants::{WHEEL_COOLDOWN_MS, WHEEL_MIN_DELTA};
use crate::host::{Host, TimerKind};

impl Carousel {
    /// A wheel event with the given axis deltas.
    ///
    /// The dominant axis decides the direction, so horizontal trackpad
    /// swipes and vertical wheels both navigate. Magnitudes below
    /// [`WHEEL_MIN_DELTA`] are inertia noise and dropped. One trigger
    /// closes the wheel gate for
    /// [`WHEEL_COOLDOWN_MS`]; everything arriving before that timer fires
    /// is ignored, which keeps a momentum-scrolling trackpad from firing
    /// a navigation per tick.
    ///
    /// Hosts must suppress the platform's native scroll for every wheel
    /// event they forward here, consumed or not.
    pub fn handle_wheel(&mut self, delta_x: f32, delta_y: f32, host: &mut dyn Host) {
        let dominant = if delta_x.abs() > delta_y.abs() {
            delta_x
        } else {
            delta_y
        };
        if dominant.abs() < WHEEL_MIN_DELTA {
            return;
        }
        if self.input.wheel.is_cooling_down() {
            return;
        }

        debug!(dominant, "wheel navigation");
        if dominant > 0.0 {
            self.go_to_next(host);
        } else {
            self.go_to_previous(host);
        }

        let timer = host.set_timeout(WHEEL_COOLDOWN_MS, TimerKind::WheelCooldown);
        self.input.wheel.arm(timer);
    }
}
