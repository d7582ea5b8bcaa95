//! Transition tracking - the in-flight animation flag.
//!
//! A navigation kicks off an animated transition on the visible cards. The
//! engine tracks "a transition is in flight" with an explicit two-state
//! machine so interaction gating never depends on real animation timing.
//!
//! ## State Transitions
//!
//! ```text
//! Idle          -> Transitioning   (begin: navigation applied new plans)
//! Transitioning -> Transitioning   (begin while in flight: fallback re-armed)
//! Transitioning -> Idle            (host completion signal; fallback canceled)
//! Transitioning -> Idle            (650 ms fallback fired; late signals ignored)
//! ```
//!
//! The completion signal is precise but not guaranteed (zero-duration
//! transitions, interrupted renders), so the fallback timeout is the
//! correctness backstop; whichever path fires first disarms the other.

use crate::constants::TRANSITION_FALLBACK_MS;
use crate::host::{Host, TimerHandle, TimerKind};

/// Whether a transition is in flight, and the fallback that bounds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TransitionPhase {
    /// No animation in flight
    #[default]
    Idle,
    /// Cards are animating toward their latest plans
    Transitioning {
        /// Pending fallback timeout clearing the flag
        fallback: TimerHandle,
    },
}

/// Tracks the single in-flight-transition flag with dual-path clearing.
#[derive(Debug, Default)]
pub(crate) struct TransitionTracker {
    phase: TransitionPhase,
}

impl TransitionTracker {
    /// Whether a transition is currently in flight
    pub(crate) fn is_transitioning(&self) -> bool {
        matches!(self.phase, TransitionPhase::Transitioning { .. })
    }

    /// Mark a transition as started and arm the fallback timeout.
    ///
    /// Re-entrant: beginning while already in flight cancels the previous
    /// fallback and arms a fresh one against the latest update.
    pub(crate) fn begin(&mut self, host: &mut dyn Host) {
        if let TransitionPhase::Transitioning { fallback } = self.phase {
            host.clear_timeout(fallback);
        }
        let fallback = host.set_timeout(TRANSITION_FALLBACK_MS, TimerKind::TransitionFallback);
        self.phase = TransitionPhase::Transitioning { fallback };
    }

    /// Completion signal from the host: a tracked visual property finished
    /// animating on a visible card. Cancels the fallback.
    pub(crate) fn finish_by_signal(&mut self, host: &mut dyn Host) {
        if let TransitionPhase::Transitioning { fallback } = self.phase {
            host.clear_timeout(fallback);
            self.phase = TransitionPhase::Idle;
        }
    }

    /// A fired host timer. Clears the flag iff the handle is this
    /// tracker's pending fallback; returns whether it was.
    pub(crate) fn finish_by_timeout(&mut self, fired: TimerHandle) -> bool {
        match self.phase {
            TransitionPhase::Transitioning { fallback } if fallback == fired => {
                self.phase = TransitionPhase::Idle;
                true
            }
            _ => false,
        }
    }
}
