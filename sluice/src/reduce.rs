// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reduce operator - folds the whole sequence into a single value.

use async_trait::async_trait;
use sluice_core::Receiver;

/// Extension trait providing the `reduce` operator for conduit receivers.
#[async_trait]
pub trait ReduceExt<T> {
    /// Consumes the sequence and combines it into one value.
    ///
    /// The first element seeds the accumulator; each following element is
    /// folded in with `combine(accumulator, element)`, in source order.
    /// Returns `None` when the source closes without producing a first
    /// element.
    ///
    /// Unlike the other operators this one does not spawn a stage: it
    /// runs on the caller's task and returns only when the source closes.
    /// A source that stays open without ever producing blocks the caller
    /// for as long as it does — keeping the producer side alive and idle
    /// is the caller's responsibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// # async fn example() {
    /// let (tx, rx) = conduit();
    ///
    /// tokio::spawn(async move {
    ///     for value in 1..=4 {
    ///         if tx.send(value).await.is_err() {
    ///             break;
    ///         }
    ///     }
    /// });
    ///
    /// assert_eq!(rx.reduce(|total, value| total + value).await, Some(10));
    /// # }
    /// ```
    async fn reduce<F>(self, combine: F) -> Option<T>
    where
        F: FnMut(T, T) -> T + Send + 'static;
}

#[async_trait]
impl<T> ReduceExt<T> for Receiver<T>
where
    T: Send + 'static,
{
    async fn reduce<F>(self, mut combine: F) -> Option<T>
    where
        F: FnMut(T, T) -> T + Send + 'static,
    {
        let mut accumulated = match self.recv().await {
            Ok(first) => first,
            Err(_) => return None,
        };
        while let Ok(value) = self.recv().await {
            accumulated = combine(accumulated, value);
        }
        Some(accumulated)
    }
}
