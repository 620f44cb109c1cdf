//! Paused-clock tests for the hint-label reveal one-shot.

use std::time::Duration;

use latch::prelude::*;
use latch::wakeup;

fn hinted_select() -> Select {
    Select::new(
        vec![SelectOption::new("a", "Alice")],
        SelectConfig::new().hint("This is a hint text to help user."),
    )
    .unwrap()
}

/// Give spawned tasks a chance to run without letting the paused clock
/// auto-advance.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_hint_reveals_only_after_the_delay() {
    let select = hinted_select();
    let (tx, _rx) = wakeup::channel();
    select.mount(tx);
    settle().await;

    tokio::time::advance(Duration::from_millis(299)).await;
    settle().await;
    assert!(!select.hint_visible(), "hidden at +299ms");

    tokio::time::advance(Duration::from_millis(2)).await;
    settle().await;
    assert!(select.hint_visible(), "visible at +301ms");
}

#[tokio::test(start_paused = true)]
async fn test_reopening_cancels_the_pending_reveal() {
    let select = hinted_select();
    let (tx, _rx) = wakeup::channel();
    select.mount(tx);
    settle().await;

    tokio::time::advance(Duration::from_millis(150)).await;
    settle().await;
    select.click_trigger();

    // The pending one-shot is gone; no amount of waiting reveals the hint
    // while the widget stays open.
    tokio::time::advance(Duration::from_millis(1000)).await;
    settle().await;
    assert!(!select.hint_visible());
}

#[tokio::test(start_paused = true)]
async fn test_closing_arms_a_fresh_reveal() {
    let select = hinted_select();
    let (tx, _rx) = wakeup::channel();
    select.mount(tx);
    settle().await;

    select.click_trigger();
    settle().await;
    select.click_outside();
    settle().await;

    tokio::time::advance(Duration::from_millis(299)).await;
    settle().await;
    assert!(!select.hint_visible());

    tokio::time::advance(Duration::from_millis(2)).await;
    settle().await;
    assert!(select.hint_visible());
}

#[tokio::test(start_paused = true)]
async fn test_opening_hides_a_revealed_hint_immediately() {
    let select = hinted_select();
    let (tx, _rx) = wakeup::channel();
    select.mount(tx);
    settle().await;

    tokio::time::advance(Duration::from_millis(301)).await;
    settle().await;
    assert!(select.hint_visible());

    select.click_trigger();
    assert!(!select.hint_visible());
}

#[tokio::test(start_paused = true)]
async fn test_reveal_sends_a_wakeup() {
    let select = hinted_select();
    let (tx, mut rx) = wakeup::channel();
    select.mount(tx);
    settle().await;

    tokio::time::advance(Duration::from_millis(301)).await;
    settle().await;
    assert!(select.hint_visible());
    assert_eq!(rx.recv().await, Some(()));
}
