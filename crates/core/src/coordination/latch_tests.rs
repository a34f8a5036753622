use super::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use yare::parameterized;

#[test]
fn counts_down_to_zero() {
    let latch = CountdownLatch::new(3);
    assert_eq!(latch.count(), 3);
    latch.count_down();
    assert_eq!(latch.count(), 2);
    latch.count_down();
    latch.count_down();
    assert_eq!(latch.count(), 0);
}

#[test]
fn count_down_saturates_at_zero() {
    let latch = CountdownLatch::new(1);
    latch.count_down();
    latch.count_down();
    latch.count_down();
    assert_eq!(latch.count(), 0);
}

#[test]
fn wait_returns_immediately_when_created_open() {
    let latch = CountdownLatch::new(0);
    latch.wait();
}

#[test]
fn late_waiter_passes_straight_through() {
    let latch = CountdownLatch::new(2);
    latch.count_down();
    latch.count_down();
    latch.wait();
}

#[test]
fn wait_blocks_until_open() {
    let latch = Arc::new(CountdownLatch::new(1));
    let waiter = {
        let latch = Arc::clone(&latch);
        thread::spawn(move || latch.wait())
    };

    thread::sleep(Duration::from_millis(20));
    assert!(!waiter.is_finished());

    latch.count_down();
    waiter.join().unwrap();
}

#[test]
fn releases_all_waiters() {
    let latch = Arc::new(CountdownLatch::new(1));
    let waiters: Vec<_> = (0..4)
        .map(|_| {
            let latch = Arc::clone(&latch);
            thread::spawn(move || latch.wait())
        })
        .collect();

    latch.count_down();
    for waiter in waiters {
        waiter.join().unwrap();
    }
}

#[parameterized(
    one = { 1 },
    five = { 5 },
    many = { 32 },
)]
fn opens_after_exactly_the_initial_count(count: usize) {
    let latch = CountdownLatch::new(count);
    for _ in 0..count - 1 {
        latch.count_down();
    }
    assert!(latch.count() > 0);
    latch.count_down();
    assert_eq!(latch.count(), 0);
}
