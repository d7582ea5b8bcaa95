//! Carousel orchestration - state definition, mounting, replanning.
//!
//! [`Carousel`] owns the authoritative navigation state and every piece of
//! mutable interaction state (transition flag, gesture machines, debounce
//! timer handles). There are no module-level singletons; hosts hold the
//! value and thread a [`Host`] into each handler call.
//!
//! Navigation ops live in `navigation.rs` and the per-gesture handlers in
//! `input/`, all as `impl Carousel` blocks.

use tracing::{debug, warn};

use crate::geometry::GeometryConfig;
use crate::host::{Host, TimerHandle};
use crate::input::InputState;
use crate::plan::plan_cards;
use crate::transition::TransitionTracker;
use crate::types::{Card, CardPlan, CardRole};

// =============================================================================
// Navigation state
// =============================================================================

/// Authoritative position of the carousel in its ring of cards.
///
/// `current_index` is mutated only by the navigation ops; everything else
/// reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    total_count: usize,
}

impl CarouselState {
    pub(crate) fn new(total_count: usize, current_index: usize) -> Self {
        debug_assert!(total_count >= 1 && current_index < total_count);
        Self {
            current_index,
            total_count,
        }
    }

    /// Index of the focal card, always in `0..total_count`
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of cards, fixed at mount
    #[inline]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Whether the collection is too small for the 3-slot layout
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.total_count <= crate::constants::DEGENERATE_MAX_CARDS
    }

    /// Step to the next card, wrapping at the end
    pub(crate) fn step_forward(&mut self) {
        self.current_index = (self.current_index + 1) % self.total_count;
    }

    /// Step to the previous card, wrapping at the start
    pub(crate) fn step_back(&mut self) {
        self.current_index = (self.current_index + self.total_count - 1) % self.total_count;
    }

    /// Direct jump; caller has validated `target`
    pub(crate) fn jump_to(&mut self, target: usize) {
        debug_assert!(target < self.total_count);
        self.current_index = target;
    }
}

// =============================================================================
// The carousel engine
// =============================================================================

/// The carousel engine for one card collection.
pub struct Carousel {
    /// Authoritative current/total indices
    pub(crate) state: CarouselState,
    /// Per-card role and animation-suppression bookkeeping
    pub(crate) cards: Vec<Card>,
    /// Injected breakpoint table, re-resolved on every replan
    pub(crate) config: GeometryConfig,
    /// In-flight transition flag with its fallback timeout
    pub(crate) transition: TransitionTracker,
    /// Gesture machines and debounce timer handles
    pub(crate) input: InputState,
    /// Plans from the most recent replan, re-applied on the snap frame
    last_plans: Vec<CardPlan>,
    /// A frame callback has been requested and not yet delivered
    frame_pending: bool,
}

impl Carousel {
    /// Mount a carousel over `card_count` cards and lay them out.
    ///
    /// Returns `None` for an empty collection: the engine performs no work
    /// and exposes no navigation. Hosts that cannot find their rendering
    /// surface handle that the same way, by never mounting.
    ///
    /// All cards start parked, so the initial replan snaps the first
    /// window into place without animation.
    pub fn mount(card_count: usize, config: GeometryConfig, host: &mut dyn Host) -> Option<Self> {
        if card_count == 0 {
            warn!("carousel has no cards, nothing to mount");
            return None;
        }

        let mut carousel = Self {
            state: CarouselState::new(card_count, 0),
            cards: (0..card_count).map(Card::new).collect(),
            config,
            transition: TransitionTracker::default(),
            input: InputState::default(),
            last_plans: Vec::new(),
            frame_pending: false,
        };

        debug!(card_count, "mounting carousel");
        carousel.replan(host);
        Some(carousel)
    }

    /// Recompute and apply the plan for every card.
    ///
    /// Reads the viewport and container widths synchronously, resolves the
    /// breakpoint table, and hands one plan per card to the host. Cards
    /// leaving the off-screen parking position get their plan with
    /// `animate: false` and a single frame callback is requested to
    /// re-enable animation.
    pub fn replan(&mut self, host: &mut dyn Host) {
        let metrics = self.config.resolve(host.viewport_width());
        let container_width = host.container_width();
        let mut plans = plan_cards(&self.state, metrics, container_width);

        let mut snapped = false;
        for plan in &mut plans {
            let card = &mut self.cards[plan.index];
            if card.role == CardRole::Hidden && plan.role.is_visible() {
                plan.animate = false;
                card.suppress_animation = true;
                snapped = true;
            }
            card.role = plan.role;
            host.apply_card_state(plan);
        }
        self.last_plans = plans;

        if snapped && !self.frame_pending {
            host.request_frame();
            self.frame_pending = true;
        }

        debug!(
            current_index = self.state.current_index(),
            card_width = metrics.card_width,
            "replan applied"
        );
    }

    /// Frame callback: re-apply the identical plans of freshly-unparked
    /// cards with animation re-enabled.
    pub fn on_frame(&mut self, host: &mut dyn Host) {
        self.frame_pending = false;
        for plan in &mut self.last_plans {
            let card = &mut self.cards[plan.index];
            if card.suppress_animation {
                card.suppress_animation = false;
                plan.animate = true;
                host.apply_card_state(plan);
            }
        }
    }

    /// Completion signal: a tracked visual property finished animating on
    /// a visible card.
    pub fn handle_transition_end(&mut self, host: &mut dyn Host) {
        self.transition.finish_by_signal(host);
    }

    /// A host timeout fired. Routed by handle to its owner; handles the
    /// engine no longer tracks are stale and ignored.
    pub fn handle_timeout(&mut self, fired: TimerHandle, host: &mut dyn Host) {
        if self.transition.finish_by_timeout(fired) {
            return;
        }
        if self.input.wheel.expire(fired) {
            return;
        }
        if self.input.resize_settle == Some(fired) {
            self.input.resize_settle = None;
            self.replan(host);
        }
    }

    // =========================================================================
    // Read accessors for host UIs
    // =========================================================================

    /// Snapshot of the navigation state
    #[inline]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Index of the focal card
    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// Number of cards, fixed at mount
    #[inline]
    pub fn card_count(&self) -> usize {
        self.state.total_count()
    }

    /// Whether the collection is too small for the 3-slot layout
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.state.is_degenerate()
    }

    /// Whether a transition is currently in flight
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    /// The cards and their current roles
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Plans from the most recent replan, one per card
    pub fn plans(&self) -> &[CardPlan] {
        &self.last_plans
    }
}
