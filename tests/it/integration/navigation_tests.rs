//! Navigation workflow tests: wraparound, jumps, degenerate collections,
//! and the visibility invariant across reachable states.

use crate::helpers::{TestRig, assert_roles, assert_visibility_invariant};
use cardwheel::{CardRole, CarouselError};

#[test]
fn test_next_wraps_around_the_ring() {
    let mut rig = TestRig::mount(5);

    for expected in [1, 2, 3, 4] {
        rig.next();
        assert_eq!(rig.carousel.current_index(), expected);
    }
    rig.next();
    assert_eq!(rig.carousel.current_index(), 0);
}

#[test]
fn test_previous_wraps_backward() {
    let mut rig = TestRig::mount(5);

    rig.previous();
    assert_eq!(rig.carousel.current_index(), 4);
    rig.previous();
    assert_eq!(rig.carousel.current_index(), 3);
}

#[test]
fn test_visibility_invariant_holds_across_walks() {
    for count in 3..8 {
        let mut rig = TestRig::mount(count);
        assert_visibility_invariant(&rig.carousel);

        for step in 0..count * 2 {
            if step % 3 == 0 {
                rig.previous();
            } else {
                rig.next();
            }
            assert_visibility_invariant(&rig.carousel);
        }

        rig.go_to(count - 1).unwrap();
        assert_visibility_invariant(&rig.carousel);
    }
}

#[test]
fn test_far_jump_swaps_window_without_passing_through() {
    let mut rig = TestRig::mount(6);

    rig.host.applied.clear();
    rig.go_to(3).unwrap();

    assert_eq!(rig.carousel.current_index(), 3);
    assert_roles(
        &rig,
        &[
            CardRole::Hidden,
            CardRole::Hidden,
            CardRole::Side,
            CardRole::Center,
            CardRole::Side,
            CardRole::Hidden,
        ],
    );
    // One replan: six plans, no intermediate windows in between.
    assert_eq!(rig.host.applied.len(), 6);
}

#[test]
fn test_jump_to_current_does_nothing() {
    let mut rig = TestRig::mount(5);
    rig.host.applied.clear();

    rig.go_to(0).unwrap();

    assert!(rig.host.applied.is_empty());
    assert!(!rig.carousel.is_transitioning());
}

#[test]
fn test_out_of_range_jump_is_rejected_unchanged() {
    let mut rig = TestRig::mount(5);
    rig.host.applied.clear();

    let err = rig.go_to(5).unwrap_err();
    assert_eq!(err, CarouselError::InvalidIndex { index: 5, count: 5 });
    assert_eq!(rig.carousel.current_index(), 0);
    assert!(rig.host.applied.is_empty());
}

#[test]
fn test_degenerate_pair_never_navigates() {
    let mut rig = TestRig::mount(2);
    assert!(rig.carousel.is_degenerate());
    assert_roles(&rig, &[CardRole::Center, CardRole::Center]);

    rig.frame();
    let before: Vec<_> = rig.carousel.plans().to_vec();
    rig.next();
    rig.previous();
    rig.go_to(1).unwrap();

    assert_eq!(rig.carousel.current_index(), 0);
    assert_eq!(rig.carousel.plans(), &before[..], "plan must be unchanged");
    assert_roles(&rig, &[CardRole::Center, CardRole::Center]);
    assert!(!rig.carousel.is_transitioning());
}

#[test]
fn test_replan_is_idempotent() {
    let mut rig = TestRig::mount(5);
    rig.frame();

    rig.host.applied.clear();
    rig.carousel.replan(&mut rig.host);
    let first: Vec<_> = rig.host.applied.clone();

    rig.host.applied.clear();
    rig.carousel.replan(&mut rig.host);

    assert_eq!(rig.host.applied, first);
}

#[test]
fn test_unparked_card_snaps_then_animates() {
    let mut rig = TestRig::mount(5);
    rig.frame();
    let frames_before = rig.host.frame_requests;

    rig.host.applied.clear();
    rig.next();

    // Card 2 enters the window from the parking position: snap.
    let entering = rig
        .host
        .applied
        .iter()
        .find(|plan| plan.index == 2)
        .expect("card 2 planned");
    assert!(!entering.animate);

    // Cards that stayed visible keep animating.
    let staying = rig
        .host
        .applied
        .iter()
        .find(|plan| plan.index == 1)
        .expect("card 1 planned");
    assert!(staying.animate);

    assert_eq!(rig.host.frame_requests, frames_before + 1);

    rig.host.applied.clear();
    rig.frame();
    assert_eq!(rig.host.applied.len(), 1);
    assert_eq!(rig.host.applied[0].index, 2);
    assert!(rig.host.applied[0].animate);
}
