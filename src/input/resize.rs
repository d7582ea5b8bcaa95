//! Viewport resize coordination.

use crate::carousel::Carousel;
use crate::constants::RESIZE_SETTLE_MS;
use crate::host::{Host, TimerKind};

impl Carousel {
    /// The viewport resized.
    ///
    /// Replanning on every intermediate resize tick would thrash the
    /// host, so each event cancels any pending settle timer and arms a
    /// fresh [`RESIZE_SETTLE_MS`] one; the replan runs only when the
    /// stream has been quiet that long (routed back through
    /// [`Carousel::handle_timeout`]).
    pub fn handle_resize(&mut self, host: &mut dyn Host) {
        if let Some(pending) = self.input.resize_settle.take() {
            host.clear_timeout(pending);
        }
        let timer = host.set_timeout(RESIZE_SETTLE_MS, TimerKind::ResizeSettle);
        self.input.resize_settle = Some(timer);
    }
}
