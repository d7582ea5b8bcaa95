//! The engine/host boundary.
//!
//! The carousel never talks to a rendering surface, an event source or a
//! clock directly. Hosts forward input events and timer callbacks into the
//! [`Carousel`](crate::Carousel) handlers and implement [`Host`] so the
//! engine can read widths, hand back render plans, and schedule timeouts
//! and frame callbacks. Every handler takes `&mut dyn Host`, so a test can
//! drive the whole engine with synthetic events and a fake host.

use crate::types::CardPlan;

/// Opaque handle to a pending host timeout.
///
/// The host picks the value; the engine only stores it, passes it back to
/// [`Host::clear_timeout`], and compares it against fired timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// What a requested timeout is for.
///
/// Purely informational for the host (useful in logs and test fakes); the
/// engine routes fired timers by handle, not by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Backstop that clears the transition flag if no completion signal
    /// arrives
    TransitionFallback,
    /// Window during which further wheel events are ignored
    WheelCooldown,
    /// Delay between the last resize event and the replan it triggers
    ResizeSettle,
}

/// Host environment driven by the carousel engine.
///
/// Contract, mirroring the handler side:
/// - width reads happen synchronously during a replan;
/// - [`apply_card_state`](Host::apply_card_state) must be idempotent:
///   re-applying an identical plan causes no visible change;
/// - a timeout scheduled with [`set_timeout`](Host::set_timeout) fires at
///   most once, delivered back through
///   [`Carousel::handle_timeout`](crate::Carousel::handle_timeout), unless
///   canceled first;
/// - [`request_frame`](Host::request_frame) schedules a one-shot callback
///   to [`Carousel::on_frame`](crate::Carousel::on_frame) on the next
///   render frame;
/// - hosts forwarding wheel events must suppress the platform's native
///   scroll for every forwarded event, consumed or not.
pub trait Host {
    /// Current width of the carousel container, in pixels
    fn container_width(&self) -> f32;

    /// Current viewport width, in pixels (drives breakpoint resolution)
    fn viewport_width(&self) -> f32;

    /// Render one card according to `plan`
    fn apply_card_state(&mut self, plan: &CardPlan);

    /// Schedule a one-shot timeout after `delay_ms` milliseconds
    fn set_timeout(&mut self, delay_ms: u64, kind: TimerKind) -> TimerHandle;

    /// Cancel a pending timeout; canceling an already-fired handle is a
    /// no-op
    fn clear_timeout(&mut self, handle: TimerHandle);

    /// Schedule a one-shot callback on the next render frame
    fn request_frame(&mut self);
}
