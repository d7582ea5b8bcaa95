//! Touch swipe handling.

use tracing::debug;

use crate::carousel::Carousel;
use crate::constants::SWIPE_MIN_DISTANCE;
use crate::host::Host;

impl Carousel {
    /// A touch began at horizontal position `x` (device pixels).
    pub fn handle_touch_start(&mut self, x: f32) {
        self.input.touch.begin(x);
    }

    /// The touch ended at horizontal position `x`.
    ///
    /// Navigates when the finger traveled more than
    /// [`SWIPE_MIN_DISTANCE`]: a leftward swipe (start right of end) goes
    /// next, a rightward swipe goes previous. Shorter swipes are dropped.
    pub fn handle_touch_end(&mut self, x: f32, host: &mut dyn Host) {
        let Some(start_x) = self.input.touch.take_start() else {
            return;
        };

        let delta = start_x - x;
        if delta.abs() <= SWIPE_MIN_DISTANCE {
            return;
        }

        debug!(delta, "swipe navigation");
        if delta > 0.0 {
            self.go_to_next(host);
        } else {
            self.go_to_previous(host);
        }
    }
}
