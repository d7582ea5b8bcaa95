//! Visibility planning.
//!
//! Turns the authoritative navigation state plus resolved geometry into one
//! [`CardPlan`] per card: which cards are rendered, where, at what scale,
//! opacity and stacking order. Pure: all inputs are passed in, so plans
//! are reproducible from literal values in tests.

use crate::carousel::CarouselState;
use crate::constants::{
    CENTER_OPACITY, CENTER_SCALE, CENTER_STACK_ORDER, HIDDEN_PARK_X, HIDDEN_STACK_ORDER,
    SIDE_OPACITY, SIDE_SCALE, SIDE_STACK_ORDER,
};
use crate::geometry::CardMetrics;
use crate::ring::circular_offset;
use crate::types::{CardPlan, CardRole};

/// Build the render plan for every card.
///
/// A card is rendered iff its ring offset from the center is at most 1.
/// Visible cards line up on `container_width / 2 - card_width / 2 +
/// offset * slot_stride`; hidden cards park off-screen with zero scale and
/// opacity and the lowest stacking order. In the degenerate case (two
/// cards or fewer) every card is a full-scale center laid out by its ring
/// offset.
///
/// Plans come back with `animate: true`; the replan pass downgrades the
/// flag for cards that just left the parking position.
pub(crate) fn plan_cards(
    state: &CarouselState,
    metrics: CardMetrics,
    container_width: f32,
) -> Vec<CardPlan> {
    let center_x = container_width / 2.0 - metrics.card_width / 2.0;
    let degenerate = state.is_degenerate();

    (0..state.total_count())
        .map(|index| {
            let offset = circular_offset(index, state.current_index(), state.total_count());

            if degenerate || offset.unsigned_abs() <= 1 {
                let (role, scale, opacity, stack_order) = if degenerate || offset == 0 {
                    (CardRole::Center, CENTER_SCALE, CENTER_OPACITY, CENTER_STACK_ORDER)
                } else {
                    (CardRole::Side, SIDE_SCALE, SIDE_OPACITY, SIDE_STACK_ORDER)
                };
                CardPlan {
                    index,
                    role,
                    visible: true,
                    x: center_x + offset as f32 * metrics.slot_stride(),
                    scale,
                    opacity,
                    stack_order,
                    animate: true,
                }
            } else {
                CardPlan {
                    index,
                    role: CardRole::Hidden,
                    visible: false,
                    x: HIDDEN_PARK_X,
                    scale: 0.0,
                    opacity: 0.0,
                    stack_order: HIDDEN_STACK_ORDER,
                    animate: true,
                }
            }
        })
        .collect()
}
