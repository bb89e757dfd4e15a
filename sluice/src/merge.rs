// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merge operator - fan several sources into one output.

use sluice_core::{conduit, Receiver};

/// Interleaves the elements of every source into one output.
///
/// One relay stage per source forwards elements as they become available;
/// the interleaving is whatever order that produces. Order within a
/// single source is preserved, and every element appears exactly once;
/// nothing else is guaranteed. The shared output closes exactly once,
/// after every source has been exhausted — each relay holds one handle to
/// the output and the conduit closes when the last handle is dropped.
///
/// `merge` does not observe a cancellation signal; wrap the sources with
/// [`or_done`](crate::OrDoneExt::or_done) if the merge must be
/// interruptible. An empty source list yields an immediately closed
/// output.
///
/// # Examples
///
/// ```
/// use sluice::merge;
/// use sluice::prelude::*;
///
/// # async fn example() {
/// let (tx_a, rx_a) = conduit();
/// let (tx_b, rx_b) = conduit();
/// let merged = merge(vec![rx_a, rx_b]);
///
/// tx_a.send(1).await.unwrap();
/// tx_b.send(2).await.unwrap();
/// drop((tx_a, tx_b));
///
/// let mut values = vec![merged.recv().await.unwrap(), merged.recv().await.unwrap()];
/// values.sort_unstable();
/// assert_eq!(values, [1, 2]);
/// assert!(merged.recv().await.is_err());
/// # }
/// ```
pub fn merge<T>(sources: Vec<Receiver<T>>) -> Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = conduit();
    for source in sources {
        let tx = tx.clone();
        tokio::spawn(async move {
            while let Ok(value) = source.recv().await {
                if tx.send(value).await.is_err() {
                    break;
                }
            }
        });
    }
    rx
}
