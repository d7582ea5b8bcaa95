//! Core types for the carousel engine.
//!
//! This module defines the data structures shared between the planner, the
//! navigation ops and host implementations: cards, their visual roles, and
//! the per-card render plan handed to the host.

use serde::{Deserialize, Serialize};

// ============================================================================
// Card Roles
// ============================================================================

/// A card's current visual classification.
///
/// With more than two cards, exactly one card is [`CardRole::Center`] and
/// its immediate ring neighbors are [`CardRole::Side`]; everything else is
/// [`CardRole::Hidden`]. With two cards or fewer, every card is permanently
/// `Center`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardRole {
    /// The focal card, full scale and opacity
    Center,
    /// Immediate left/right neighbor of the center, scaled down and dimmed
    Side,
    /// Parked off-screen, interaction-disabled
    #[default]
    Hidden,
}

impl CardRole {
    /// Whether a card with this role is rendered at all
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

// ============================================================================
// Cards
// ============================================================================

/// One renderable unit owned by the carousel.
///
/// Cards are created at mount, keep their index for the life of the
/// carousel, and are never created or destroyed at runtime.
#[derive(Clone, Debug)]
pub struct Card {
    /// Stable position in the collection, assigned at mount
    pub index: usize,
    /// Current visual classification
    pub role: CardRole,
    /// Set while the card's next applied plan must skip the animated
    /// transition (it just came out of the off-screen parking position)
    pub(crate) suppress_animation: bool,
}

impl Card {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            role: CardRole::Hidden,
            suppress_animation: false,
        }
    }

    /// Whether this card is the current focal card
    #[inline]
    pub fn is_center(&self) -> bool {
        self.role == CardRole::Center
    }
}

// ============================================================================
// Render Plans
// ============================================================================

/// Per-card render plan delivered to the host.
///
/// Hosts must apply plans idempotently: re-applying an identical plan
/// causes no visible change. `animate: false` means the position must be
/// applied without an animated transition (snap); the engine re-applies the
/// same plan with `animate: true` on the next host frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CardPlan {
    /// Which card this plan is for
    pub index: usize,
    /// Visual classification driving the styling below
    pub role: CardRole,
    /// Whether the card is rendered (center or side) or parked
    pub visible: bool,
    /// Horizontal position of the card's left edge, in container pixels
    pub x: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// Stacking order; hidden cards get the lowest and must not receive
    /// interaction
    pub stack_order: i32,
    /// Whether the host may animate toward this plan
    pub animate: bool,
}
