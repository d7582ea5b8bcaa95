//! Engine-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Responsive Breakpoints
// ============================================================================

/// Widest viewport treated as "narrow" (phones)
pub const NARROW_MAX_WIDTH: f32 = 576.0;

/// Widest viewport treated as "medium" (small tablets)
pub const MEDIUM_MAX_WIDTH: f32 = 768.0;

/// Card width on narrow viewports
pub const NARROW_CARD_WIDTH: f32 = 280.0;

/// Inter-card gap on narrow viewports
pub const NARROW_GAP: f32 = 16.0;

/// Card width on medium viewports
pub const MEDIUM_CARD_WIDTH: f32 = 300.0;

/// Inter-card gap on medium viewports
pub const MEDIUM_GAP: f32 = 32.0;

/// Card width on wide viewports
pub const WIDE_CARD_WIDTH: f32 = 400.0;

/// Inter-card gap on wide viewports
pub const WIDE_GAP: f32 = 32.0;

// ============================================================================
// Slot Styling
// ============================================================================

/// Scale applied to the focal card
pub const CENTER_SCALE: f32 = 1.0;

/// Opacity of the focal card
pub const CENTER_OPACITY: f32 = 1.0;

/// Scale applied to the two side cards
pub const SIDE_SCALE: f32 = 0.65;

/// Opacity of the two side cards
pub const SIDE_OPACITY: f32 = 0.5;

/// Stack order of the focal card (topmost)
pub const CENTER_STACK_ORDER: i32 = 2;

/// Stack order of the side cards
pub const SIDE_STACK_ORDER: i32 = 1;

/// Stack order of hidden cards (interaction-disabled)
pub const HIDDEN_STACK_ORDER: i32 = 0;

/// Off-screen parking position for hidden cards
pub const HIDDEN_PARK_X: f32 = -9999.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Fallback timeout clearing the transition flag when no completion
/// signal arrives, in milliseconds
pub const TRANSITION_FALLBACK_MS: u64 = 650;

/// Wheel navigation cooldown window in milliseconds.
/// Longer than [`TRANSITION_FALLBACK_MS`] so a trackpad can't re-trigger
/// mid-animation.
pub const WHEEL_COOLDOWN_MS: u64 = 700;

/// Resize settle delay in milliseconds before replanning
pub const RESIZE_SETTLE_MS: u64 = 150;

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum horizontal travel in device pixels for a touch swipe to navigate
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;

/// Minimum dominant-axis wheel delta to consider at all
pub const WHEEL_MIN_DELTA: f32 = 15.0;

// ============================================================================
// Collection Limits
// ============================================================================

/// Largest card count for which the 3-slot layout degenerates to a
/// plain all-center row
pub const DEGENERATE_MAX_CARDS: usize = 2;
