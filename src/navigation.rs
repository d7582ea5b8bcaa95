//! Navigation ops - the only writers of the current index.
//!
//! Every mutation is a synchronous step-replan-transition sequence, so two
//! navigation triggers can never interleave. With two cards or fewer the
//! index never moves: the ops replan and return, keeping the degenerate
//! all-center layout stable.

use tracing::{debug, warn};

use crate::carousel::Carousel;
use crate::error::{CarouselError, CarouselResult};
use crate::host::Host;

impl Carousel {
    /// Advance to the next card, wrapping past the end.
    pub fn go_to_next(&mut self, host: &mut dyn Host) {
        if self.state.is_degenerate() {
            self.replan(host);
            return;
        }
        self.state.step_forward();
        debug!(current_index = self.state.current_index(), "navigate next");
        self.replan(host);
        self.transition.begin(host);
    }

    /// Step back to the previous card, wrapping past the start.
    pub fn go_to_previous(&mut self, host: &mut dyn Host) {
        if self.state.is_degenerate() {
            self.replan(host);
            return;
        }
        self.state.step_back();
        debug!(current_index = self.state.current_index(), "navigate previous");
        self.replan(host);
        self.transition.begin(host);
    }

    /// Jump straight to `target`.
    ///
    /// The jump is a direct index assignment, not a shortest-path walk: a
    /// far target swaps the visible window in place without passing
    /// through intermediate cards. Out-of-range targets are rejected with
    /// state unchanged; jumping to the current card does nothing.
    pub fn go_to_index(&mut self, target: usize, host: &mut dyn Host) -> CarouselResult<()> {
        let count = self.state.total_count();
        if target >= count {
            warn!(target, count, "rejected jump to out-of-range card");
            return Err(CarouselError::InvalidIndex {
                index: target,
                count,
            });
        }
        if target == self.state.current_index() {
            return Ok(());
        }
        if self.state.is_degenerate() {
            self.replan(host);
            return Ok(());
        }

        self.state.jump_to(target);
        debug!(current_index = target, "navigate jump");
        self.replan(host);
        self.transition.begin(host);
        Ok(())
    }
}
