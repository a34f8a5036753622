use super::*;

#[test]
fn starts_lowered() {
    assert!(!StopFlag::new().is_raised());
}

#[test]
fn first_raise_wins_the_transition() {
    let flag = StopFlag::new();
    assert!(flag.raise());
    assert!(!flag.raise());
    assert!(flag.is_raised());
}

#[test]
fn clones_share_state() {
    let flag = StopFlag::new();
    let clone = flag.clone();

    assert!(flag.raise());
    assert!(clone.is_raised());
    assert!(!clone.raise());
}
