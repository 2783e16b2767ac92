use std::time::Duration;
use tokio::time::timeout;
use mediascan::{Cancellable, ErrorKind};

#[tokio::test]
async fn test_cancelled_wakes_waiter() {
    let cancellable = Cancellable::new();
    let waiter = {
        let c = cancellable.clone();
        tokio::spawn(async move { c.cancelled().await })
    };

    // Let the waiter park before cancelling
    tokio::task::yield_now().await;
    assert!(!waiter.is_finished());

    let canceller = {
        let c = cancellable.clone();
        tokio::spawn(async move { c.cancel() })
    };
    canceller.await.unwrap();

    timeout(Duration::from_secs(2), waiter)
        .await
        .expect("waiter was not woken")
        .unwrap();
    assert!(cancellable.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_returns_at_once_when_already_cancelled() {
    let cancellable = Cancellable::new();
    cancellable.cancel();

    timeout(Duration::from_millis(100), cancellable.cancelled())
        .await
        .expect("cancelled() should not wait");
}

#[tokio::test]
async fn test_cancel_is_idempotent() {
    let cancellable = Cancellable::default();
    assert!(cancellable.check().is_ok());

    cancellable.cancel();
    cancellable.cancel();

    let err = cancellable.check().err().expect("check should fail");
    assert_eq!(err.kind(), ErrorKind::Cancelled);
}
