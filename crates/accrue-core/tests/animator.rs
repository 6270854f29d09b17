// File: crates/accrue-core/tests/animator.rs
// Purpose: Animator state machine: one record per tick, stops at the total.

use accrue_core::{AnimationState, Animator};

#[test]
fn visible_prefix_grows_one_per_tick() {
    let mut a = Animator::new(4);
    assert_eq!(a.state(), AnimationState::Idle);
    assert_eq!(a.visible(), 0);

    for k in 1..=4 {
        assert_eq!(a.tick(), Some(k));
        assert_eq!(a.visible(), k);
    }
    assert!(a.is_complete());
    assert_eq!(a.tick(), None);
    assert_eq!(a.visible(), 4);
}

#[test]
fn running_until_last_record() {
    let mut a = Animator::new(3);
    a.tick();
    assert_eq!(a.state(), AnimationState::Running { visible: 1 });
    a.tick();
    assert_eq!(a.state(), AnimationState::Running { visible: 2 });
    a.tick();
    assert_eq!(a.state(), AnimationState::Complete);
}

#[test]
fn single_record_completes_on_first_tick() {
    let mut a = Animator::new(1);
    assert_eq!(a.tick(), Some(1));
    assert!(a.is_complete());
}

#[test]
fn empty_series_never_draws() {
    let mut a = Animator::new(0);
    assert_eq!(a.tick(), None);
    assert!(a.is_complete());
    assert_eq!(a.visible(), 0);
}
