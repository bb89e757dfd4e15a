use sluice_core::{conduit, Receiver, Sender};
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Spawns a producer feeding `values` into a fresh conduit and returns
/// the read side. The producer stops early if the consumer detaches.
pub fn feed<T>(values: Vec<T>) -> Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = conduit();
    tokio::spawn(async move {
        for value in values {
            if tx.send(value).await.is_err() {
                break;
            }
        }
    });
    rx
}

/// Creates `count` conduits, returning the senders and receivers as
/// parallel vectors. Convenient for broadcast/distribute tests.
pub fn conduits<T>(count: usize) -> (Vec<Sender<T>>, Vec<Receiver<T>>) {
    (0..count).map(|_| conduit()).unzip()
}

/// Drains `source` to completion; returning at all proves the conduit
/// was closed.
pub async fn collect<T>(source: Receiver<T>) -> Vec<T> {
    let mut values = Vec::new();
    while let Ok(value) = source.recv().await {
        values.push(value);
    }
    values
}

/// Receives the next value, panicking if the conduit closes or nothing
/// arrives within `timeout_ms`.
pub async fn recv_within<T>(source: &Receiver<T>, timeout_ms: u64) -> T {
    match timeout(Duration::from_millis(timeout_ms), source.recv()).await {
        Ok(Ok(value)) => value,
        Ok(Err(_)) => panic!("conduit closed while a value was expected"),
        Err(_) => panic!("no value arrived within {timeout_ms}ms"),
    }
}

/// Asserts the conduit signals end-of-sequence within `timeout_ms`
/// without yielding another value.
pub async fn assert_closed<T: Debug>(source: &Receiver<T>, timeout_ms: u64) {
    match timeout(Duration::from_millis(timeout_ms), source.recv()).await {
        Ok(Ok(value)) => panic!("expected a closed conduit, received {value:?}"),
        Ok(Err(_)) => {}
        Err(_) => panic!("conduit neither closed nor yielded within {timeout_ms}ms"),
    }
}

/// Asserts the conduit stays open but silent for the whole observation
/// window.
pub async fn assert_silent<T: Debug>(source: &Receiver<T>, window_ms: u64) {
    tokio::select! {
        received = source.recv() => match received {
            Ok(value) => panic!("unexpected value emitted: {value:?}"),
            Err(_) => panic!("conduit unexpectedly closed"),
        },
        _ = sleep(Duration::from_millis(window_ms)) => {}
    }
}
