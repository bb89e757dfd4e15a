// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tee operators - broadcast every element to every output.
//!
//! The caller supplies the output senders and keeps their receivers; the
//! stage takes close-ownership of the senders for the duration of the
//! call and closes each exactly once after the source is exhausted. None
//! of the variants observes a cancellation signal: a tee runs until its
//! source closes. An output whose receiver has been dropped is skipped;
//! the remaining outputs keep receiving.
//!
//! The three variants differ only in delivery discipline:
//!
//! - [`tee`](TeeExt::tee) delivers element `i` to every output before
//!   receiving element `i+1`, so all outputs observe the same order and
//!   the slowest consumer paces the whole broadcast.
//! - [`tee_async`](TeeExt::tee_async) hands each delivery to a transient
//!   task, decoupling per-output pacing at the cost of one task per
//!   element per output and no cross-output ordering.
//! - [`tee_random`](TeeExt::tee_random) keeps at most one element pending
//!   like `tee`, but delivers it to the outputs in whatever order a
//!   shuffled multi-way race completes.

use crate::util;
use futures::stream::{FuturesUnordered, StreamExt};
use sluice_core::{FanError, Receiver, Sender};

/// Extension trait providing the broadcast family of operators.
pub trait TeeExt<T> {
    /// Broadcasts every element to every output, one element at a time.
    ///
    /// Element `i` is delivered to all outputs before element `i+1` is
    /// received, so every output observes the source order and the
    /// broadcast advances at the pace of its slowest consumer.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::NoOutputs`] when `outputs` is empty; the
    /// stage is not spawned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// # async fn example() {
    /// let (tx, rx) = conduit();
    /// let (left_tx, left) = conduit();
    /// let (right_tx, right) = conduit();
    ///
    /// rx.tee(vec![left_tx, right_tx]).unwrap();
    ///
    /// tx.send("reading").await.unwrap();
    /// assert_eq!(left.recv().await, Ok("reading"));
    /// assert_eq!(right.recv().await, Ok("reading"));
    /// # }
    /// ```
    fn tee(self, outputs: Vec<Sender<T>>) -> Result<(), FanError>;

    /// Broadcasts every element to every output, each delivery on its own
    /// transient task.
    ///
    /// No ordering or pacing is guaranteed across outputs, or even within
    /// one output. Each output still receives every element exactly once
    /// and closes only after its last in-flight delivery has landed.
    fn tee_async(self, outputs: Vec<Sender<T>>) -> Result<(), FanError>;

    /// Broadcasts one element at a time, delivering it to the outputs in
    /// the completion order of a shuffled multi-way race.
    ///
    /// Like [`tee`](TeeExt::tee), at most one element is pending at any
    /// moment and every output sees the source order; which output
    /// receives the pending element first is not controlled by the
    /// caller.
    fn tee_random(self, outputs: Vec<Sender<T>>) -> Result<(), FanError>;
}

impl<T> TeeExt<T> for Receiver<T>
where
    T: Clone + Send + 'static,
{
    fn tee(self, outputs: Vec<Sender<T>>) -> Result<(), FanError> {
        util::require_outputs(&outputs)?;
        tokio::spawn(async move {
            while let Ok(value) = self.recv().await {
                for (index, output) in outputs.iter().enumerate() {
                    if output.send(value.clone()).await.is_err() {
                        crate::logging::warn!(
                            "tee: output {} detached before source exhausted",
                            index
                        );
                    }
                }
            }
        });
        Ok(())
    }

    fn tee_async(self, outputs: Vec<Sender<T>>) -> Result<(), FanError> {
        util::require_outputs(&outputs)?;
        tokio::spawn(async move {
            while let Ok(value) = self.recv().await {
                for output in &outputs {
                    let output = output.clone();
                    let element = value.clone();
                    tokio::spawn(async move {
                        let _ = output.send(element).await;
                    });
                }
            }
            // Dropping the primary senders here does not close the
            // outputs early: each conduit stays open until its in-flight
            // clones are gone too.
        });
        Ok(())
    }

    fn tee_random(self, outputs: Vec<Sender<T>>) -> Result<(), FanError> {
        util::require_outputs(&outputs)?;
        tokio::spawn(async move {
            while let Ok(value) = self.recv().await {
                let mut order: Vec<usize> = (0..outputs.len()).collect();
                fastrand::shuffle(&mut order);
                let mut deliveries: FuturesUnordered<_> = order
                    .into_iter()
                    .map(|index| {
                        let element = value.clone();
                        let output = &outputs[index];
                        async move {
                            if output.send(element).await.is_err() {
                                crate::logging::warn!(
                                    "tee_random: output {} detached before source exhausted",
                                    index
                                );
                            }
                        }
                    })
                    .collect();
                while deliveries.next().await.is_some() {}
            }
        });
        Ok(())
    }
}
