// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-out operators - distribute every element to exactly one output.
//!
//! As with the tee family, the caller supplies the output senders and the
//! stage closes each exactly once when the source is exhausted; neither
//! variant observes a cancellation signal.

use crate::util;
use futures::stream::{FuturesUnordered, StreamExt};
use sluice_core::{FanError, Receiver, Sender};

/// Extension trait providing the distribute family of operators.
pub trait FanOutExt<T> {
    /// Distributes elements round-robin: element `i` goes to output
    /// `i % N`, deterministically.
    ///
    /// A detached output's turn still comes around — its elements are
    /// dropped rather than re-routed, so the live outputs keep their
    /// deterministic share.
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
    /// rx.fan_out(vec![left_tx, right_tx]).unwrap();
    ///
    /// tx.send(1).await.unwrap();
    /// tx.send(2).await.unwrap();
    ///
    /// assert_eq!(left.recv().await, Ok(1));
    /// assert_eq!(right.recv().await, Ok(2));
    /// # }
    /// ```
    fn fan_out(self, outputs: Vec<Sender<T>>) -> Result<(), FanError>;

    /// Distributes each element to whichever output wins a shuffled
    /// multi-way race among those ready to accept it.
    ///
    /// No fairness is guaranteed beyond "every ready output can
    /// eventually win". Losing candidate deliveries are abandoned before
    /// they complete, which is what keeps delivery exactly-once; each
    /// candidate owns a copy of the element, hence the `Clone` bound.
    /// Outputs found closed are pruned from the race; when none remain
    /// the stage stops.
    fn fan_out_random(self, outputs: Vec<Sender<T>>) -> Result<(), FanError>
    where
        T: Clone;
}

impl<T> FanOutExt<T> for Receiver<T>
where
    T: Send + 'static,
{
    fn fan_out(self, outputs: Vec<Sender<T>>) -> Result<(), FanError> {
        util::require_outputs(&outputs)?;
        tokio::spawn(async move {
            let mut turn = 0;
            while let Ok(value) = self.recv().await {
                if outputs[turn].send(value).await.is_err() {
                    crate::logging::warn!("fan_out: output {} detached, element dropped", turn);
                }
                turn = (turn + 1) % outputs.len();
            }
        });
        Ok(())
    }

    fn fan_out_random(self, outputs: Vec<Sender<T>>) -> Result<(), FanError>
    where
        T: Clone,
    {
        util::require_outputs(&outputs)?;
        tokio::spawn(async move {
            let mut outputs = outputs;
            'elements: while let Ok(value) = self.recv().await {
                loop {
                    outputs.retain(|output| !output.is_closed());
                    if outputs.is_empty() {
                        crate::logging::warn!("fan_out_random: every output detached, stopping");
                        return;
                    }
                    let mut order: Vec<usize> = (0..outputs.len()).collect();
                    fastrand::shuffle(&mut order);
                    let outcome = {
                        let mut candidates: FuturesUnordered<_> = order
                            .into_iter()
                            .map(|index| {
                                let element = value.clone();
                                let output = &outputs[index];
                                async move { output.send(element).await }
                            })
                            .collect();
                        candidates.next().await
                    };
                    match outcome {
                        Some(Ok(())) => continue 'elements,
                        // The winning slot closed mid-race; prune and redo.
                        Some(Err(_)) => continue,
                        None => return,
                    }
                }
            }
        });
        Ok(())
    }
}
