//! Card and control-button clicks.

use tracing::debug;

use crate::carousel::Carousel;
use crate::host::Host;
use crate::types::CardRole;

/// The two dedicated navigation controls a host page may offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavControl {
    /// The "previous" button
    Previous,
    /// The "next" button
    Next,
}

impl Carousel {
    /// A primary click landed on the card at `index`.
    ///
    /// Clicking a side card jumps to it; clicks on the centered card, on
    /// cards mid-transition, or outside the collection do nothing.
    pub fn handle_card_click(&mut self, index: usize, host: &mut dyn Host) {
        if index >= self.state.total_count() {
            return;
        }
        if self.transition.is_transitioning() {
            debug!(index, "click ignored mid-transition");
            return;
        }
        if self.cards[index].role == CardRole::Center {
            return;
        }
        // Range was checked above, so the jump cannot be rejected.
        let _ = self.go_to_index(index, host);
    }

    /// A primary click landed on a prev/next control.
    pub fn handle_control_click(&mut self, control: NavControl, host: &mut dyn Host) {
        match control {
            NavControl::Previous => self.go_to_previous(host),
            NavControl::Next => self.go_to_next(host),
        }
    }
}
