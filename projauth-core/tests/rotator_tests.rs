//! Tests for the timer-driven rotator lifecycle
//!
//! All tests run on a paused tokio clock, so the one second interval is
//! simulated and auto-advanced whenever the runtime is idle.

use projauth_core::code::rotator::CodeRotator;
use projauth_core::types::CodeLength;
use std::time::Duration;
use tokio::time::{sleep, Instant};

#[tokio::test(start_paused = true)]
async fn test_start_generates_immediately() {
    let handle = CodeRotator::start(CodeLength::new(6), 30);
    let snapshot = handle.snapshot();

    assert!(handle.is_active());
    assert_eq!(snapshot.code.len(), 6);
    assert_eq!(snapshot.remaining, 30);
    assert_eq!(snapshot.period, 30);
    assert_eq!(snapshot.generation, 0);
    assert_eq!(snapshot.ticks, 0);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_one_second_after_start() {
    let started = Instant::now();
    let handle = CodeRotator::start(CodeLength::new(4), 30);
    let mut updates = handle.subscribe();

    updates.changed().await.expect("rotator should publish a tick");
    let elapsed = started.elapsed();

    assert!(elapsed >= Duration::from_secs(1), "ticked early: {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(1100), "ticked late: {:?}", elapsed);

    let snapshot = updates.borrow().clone();
    assert_eq!(snapshot.ticks, 1);
    assert_eq!(snapshot.remaining, 29);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_full_cycle_regenerates_on_30th_tick() {
    let handle = CodeRotator::start(CodeLength::new(6), 30);
    let initial = handle.snapshot();
    let mut updates = handle.subscribe();

    for _ in 0..29 {
        updates.changed().await.expect("rotator stopped early");
    }
    let before = updates.borrow().clone();
    assert_eq!(before.ticks, 29);
    assert_eq!(before.remaining, 1);
    assert_eq!(before.generation, 0);
    assert_eq!(before.code, initial.code);

    updates.changed().await.expect("rotator stopped early");
    let after = updates.borrow().clone();
    assert_eq!(after.ticks, 30);
    assert_eq!(after.remaining, 30);
    assert_eq!(after.generation, 1);
    assert_eq!(after.code.len(), 6);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_long_run_counts_every_second() {
    let handle = CodeRotator::start(CodeLength::new(8), 30);

    sleep(Duration::from_millis(95_500)).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.ticks, 95);
    assert_eq!(snapshot.generation, 3);
    assert_eq!(snapshot.remaining, 25);
    assert_eq!(snapshot.code.len(), 8);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_set_length_resets_countdown() {
    let handle = CodeRotator::start(CodeLength::new(4), 30);
    let mut updates = handle.subscribe();

    for _ in 0..5 {
        updates.changed().await.expect("rotator stopped early");
    }
    assert_eq!(updates.borrow().remaining, 25);

    handle.set_length(CodeLength::new(6));
    updates.changed().await.expect("rotator stopped early");

    let snapshot = updates.borrow().clone();
    assert_eq!(snapshot.length, CodeLength::new(6));
    assert_eq!(snapshot.code.len(), 6);
    assert_eq!(snapshot.remaining, 30);
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.ticks, 5);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_regenerate_now_resets_countdown() {
    let handle = CodeRotator::start(CodeLength::new(10), 30);
    let mut updates = handle.subscribe();

    for _ in 0..17 {
        updates.changed().await.expect("rotator stopped early");
    }

    handle.regenerate_now();
    updates.changed().await.expect("rotator stopped early");

    let snapshot = updates.borrow().clone();
    assert_eq!(snapshot.remaining, 30);
    assert_eq!(snapshot.code.len(), 10);
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.ticks, 17);

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_no_ticks_after_stop() {
    let handle = CodeRotator::start(CodeLength::new(6), 30);
    let mut updates = handle.subscribe();

    for _ in 0..3 {
        updates.changed().await.expect("rotator stopped early");
    }

    handle.stop().await;

    sleep(Duration::from_secs(120)).await;

    assert_eq!(updates.borrow().ticks, 3);
    assert!(
        updates.changed().await.is_err(),
        "state channel should be closed after teardown"
    );
}

#[tokio::test(start_paused = true)]
async fn test_no_ticks_after_handle_dropped() {
    let handle = CodeRotator::start(CodeLength::new(6), 30);
    let mut updates = handle.subscribe();

    for _ in 0..2 {
        updates.changed().await.expect("rotator stopped early");
    }

    drop(handle);

    sleep(Duration::from_secs(120)).await;

    assert_eq!(updates.borrow().ticks, 2);
    assert!(updates.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_independent_rotators_do_not_share_state() {
    let first = CodeRotator::start(CodeLength::new(4), 30);
    let second = CodeRotator::start(CodeLength::new(8), 30);

    sleep(Duration::from_millis(10_500)).await;
    first.regenerate_now();
    sleep(Duration::from_millis(100)).await;

    let a = first.snapshot();
    let b = second.snapshot();
    assert_eq!(a.remaining, 30);
    assert_eq!(a.generation, 1);
    assert_eq!(b.remaining, 20);
    assert_eq!(b.generation, 0);
    assert_eq!(b.code.len(), 8);

    first.stop().await;
    second.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_progress_follows_countdown() {
    let handle = CodeRotator::start(CodeLength::new(4), 30);
    let mut updates = handle.subscribe();
    assert_eq!(handle.snapshot().progress(), 1.0);

    for _ in 0..15 {
        updates.changed().await.expect("rotator stopped early");
    }
    assert_eq!(updates.borrow().progress(), 0.5);

    for _ in 0..15 {
        updates.changed().await.expect("rotator stopped early");
    }
    assert_eq!(updates.borrow().progress(), 1.0);

    handle.stop().await;
}
