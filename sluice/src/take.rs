// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operators - keep a counted prefix, a leading run, or every
//! matching element.

use crate::util;
use sluice_core::{conduit, Receiver, Signal};

/// Extension trait providing the take family of operators.
pub trait TakeExt<T> {
    /// Forwards exactly the first `count` elements, then closes the
    /// output without draining the remainder of the source.
    ///
    /// Fewer elements are forwarded when the source closes or the signal
    /// fires early. `count == 0` yields an immediately closed output.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// # async fn example() {
    /// let signal = Signal::new();
    /// let (tx, rx) = conduit();
    /// let first_two = rx.take_n(&signal, 2);
    ///
    /// tx.send(1).await.unwrap();
    /// tx.send(2).await.unwrap();
    ///
    /// assert_eq!(first_two.recv().await, Ok(1));
    /// assert_eq!(first_two.recv().await, Ok(2));
    /// assert!(first_two.recv().await.is_err());
    /// # }
    /// ```
    fn take_n(self, signal: &Signal, count: usize) -> Receiver<T>;

    /// Forwards elements until `predicate` first fails, then closes
    /// immediately. The failing element is dropped and nothing after it
    /// is received from the source.
    fn take_while<P>(self, signal: &Signal, predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static;

    /// Forwards every element matching `predicate` and silently drops
    /// the rest, continuing to the end of the source.
    fn take_matching<P>(self, signal: &Signal, predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static;
}

impl<T> TakeExt<T> for Receiver<T>
where
    T: Send + 'static,
{
    fn take_n(self, signal: &Signal, count: usize) -> Receiver<T> {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            for _ in 0..count {
                match util::recv_or_fired(&self, &signal).await {
                    Some(value) => {
                        if !util::deliver_or_fired(&tx, &signal, value).await {
                            return;
                        }
                    }
                    None => return,
                }
            }
        });
        rx
    }

    fn take_while<P>(self, signal: &Signal, mut predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            while let Some(value) = util::recv_or_fired(&self, &signal).await {
                if !predicate(&value) {
                    return;
                }
                if !util::deliver_or_fired(&tx, &signal, value).await {
                    return;
                }
            }
        });
        rx
    }

    fn take_matching<P>(self, signal: &Signal, mut predicate: P) -> Receiver<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            while let Some(value) = util::recv_or_fired(&self, &signal).await {
                if !predicate(&value) {
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
