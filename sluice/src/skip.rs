// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operators - discard a counted prefix, a leading run, or every
//! matching element.
//!
//! All three run as one stage each and observe the shared [`Signal`]: a
//! fire during either the discard phase or the pass-through phase stops
//! the stage promptly, and the output closes without further elements.

use crate::util;
use sluice_core::{conduit, Receiver, Signal};

/// Extension trait providing the skip family of operators.
pub trait SkipExt<T> {
    /// Discards exactly the first `count` elements, then forwards the
    /// rest unchanged.
    ///
    /// Fewer than `count` elements are discarded when the source closes
    /// or the signal fires early. `count == 0` forwards everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// # async fn example() {
    /// let signal = Signal::new();
    /// let (tx, rx) = conduit();
    /// let tail = rx.skip_n(&signal, 2);
    ///
    /// for value in [1, 2, 3] {
    ///     tx.send(value).await.unwrap();
    /// }
    /// drop(tx);
    ///
    /// assert_eq!(tail.recv().await, Ok(3));
    /// assert!(tail.recv().await.is_err());
    /// # }
    /// ```
    fn skip_n(self, signal: &Signal, count: usize) -> Receiver<T>;

    /// Discards the leading run of elements matching `predicate`; once
    /// one element fails the predicate, everything from that element on
    /// is forwarded — including later elements that would have matched.
    fn skip_while<P>(self, signal: &Signal, predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static;

    /// Discards every element matching `predicate`, wherever it occurs,
    /// and forwards the rest.
    fn skip_matching<P>(self, signal: &Signal, predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static;
}

impl<T> SkipExt<T> for Receiver<T>
where
    T: Send + 'static,
{
    fn skip_n(self, signal: &Signal, count: usize) -> Receiver<T> {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            for _ in 0..count {
                if util::recv_or_fired(&self, &signal).await.is_none() {
                    return;
                }
            }
            while let Some(value) = util::recv_or_fired(&self, &signal).await {
                if !util::deliver_or_fired(&tx, &signal, value).await {
                    return;
                }
            }
        });
        rx
    }

    fn skip_while<P>(self, signal: &Signal, mut predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            // One-way latch: flips to forwarding on the first non-match.
            let mut discarding = true;
            while let Some(value) = util::recv_or_fired(&self, &signal).await {
                if discarding {
                    if predicate(&value) {
                        continue;
                    }
                    discarding = false;
                }
                if !util::deliver_or_fired(&tx, &signal, value).await {
                    return;
                }
            }
        });
        rx
    }

    fn skip_matching<P>(self, signal: &Signal, mut predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            while let Some(value) = util::recv_or_fired(&self, &signal).await {
                if predicate(&value) {
                    continue;
                }
                if !util::deliver_or_fired(&tx, &signal, value).await {
                    return;
                }
            }
        });
        rx
    }
}
