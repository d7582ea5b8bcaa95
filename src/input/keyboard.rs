//! Arrow-key navigation.

use crate::carousel::Carousel;
use crate::host::Host;

/// Keys the carousel reacts to. Hosts translate their platform key codes
/// and forward only these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Navigate to the previous card
    ArrowLeft,
    /// Navigate to the next card
    ArrowRight,
}

impl Carousel {
    /// A key went down.
    ///
    /// No repeat suppression beyond the platform's own key-repeat rate:
    /// each discrete step is idempotent, so held keys simply walk the
    /// ring.
    pub fn handle_key_down(&mut self, key: Key, host: &mut dyn Host) {
        match key {
            Key::ArrowLeft => self.go_to_previous(host),
            Key::ArrowRight => self.go_to_next(host),
        }
    }
}
