//! Gesture state machines and debounce timer ownership.
//!
//! ## State Transitions
//!
//! ```text
//! TouchGesture::Idle     -> Tracking        (finger down, start x recorded)
//! TouchGesture::Tracking -> Idle            (finger up - swipe evaluated)
//!
//! WheelGate::Open        -> Cooldown        (wheel navigation triggered)
//! WheelGate::Cooldown    -> Open            (700 ms cooldown timer fired)
//! ```
//!
//! The resize settle timer has no phases beyond pending/absent, so it
//! stays an `Option<TimerHandle>`; each resize event cancels and replaces
//! it.

use crate::host::TimerHandle;

/// All interaction state owned by the input handlers.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    /// Swipe tracking between touch-start and touch-end
    pub touch: TouchGesture,
    /// Wheel cooldown gate
    pub wheel: WheelGate,
    /// Pending resize settle timer, if any
    pub resize_settle: Option<TimerHandle>,
}

/// Touch swipe tracking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum TouchGesture {
    /// No finger down
    #[default]
    Idle,
    /// Finger down; x position at contact
    Tracking {
        /// Horizontal position where the touch began, in device pixels
        start_x: f32,
    },
}

impl TouchGesture {
    /// Record a touch-begin at `start_x`.
    ///
    /// A second touch-begin without an intervening end restarts tracking
    /// from the new position.
    pub fn begin(&mut self, start_x: f32) {
        *self = Self::Tracking { start_x };
    }

    /// Finish the gesture, returning the recorded start x if one exists.
    pub fn take_start(&mut self) -> Option<f32> {
        match *self {
            Self::Tracking { start_x } => {
                *self = Self::Idle;
                Some(start_x)
            }
            Self::Idle => None,
        }
    }

    /// Returns true if a finger is currently down
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }
}

/// Wheel navigation gate.
///
/// While cooling down, every wheel event is dropped; the window opens at
/// the navigation trigger and closes only when its timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum WheelGate {
    /// Wheel events may trigger navigation
    #[default]
    Open,
    /// Ignoring wheel events until the cooldown timer fires
    Cooldown {
        /// Pending cooldown timer
        timer: TimerHandle,
    },
}

impl WheelGate {
    /// Close the gate behind a freshly-armed cooldown timer.
    pub fn arm(&mut self, timer: TimerHandle) {
        *self = Self::Cooldown { timer };
    }

    /// A host timeout fired. Reopens the gate iff the handle is this
    /// gate's pending timer; returns whether it was.
    pub fn expire(&mut self, fired: TimerHandle) -> bool {
        match *self {
            Self::Cooldown { timer } if timer == fired => {
                *self = Self::Open;
                true
            }
            _ => false,
        }
    }

    /// Returns true while wheel events are being ignored
    pub fn is_cooling_down(&self) -> bool {
        matches!(self, Self::Cooldown { .. })
    }
}
