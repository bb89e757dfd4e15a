// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flatten operator - concatenates a sequence of sequences.

use crate::or_done::OrDoneExt;
use crate::util;
use sluice_core::{conduit, Receiver, Signal};

/// Extension trait providing the `flatten` operator for receivers of
/// receivers.
pub trait FlattenExt<T> {
    /// Fans a sequence of inner sequences into one flat output.
    ///
    /// Inner sequences are drained to completion one at a time, in the
    /// order they arrive on the outer conduit, so the output is their
    /// concatenation. Each inner sequence is read through an
    /// [`or_done`](OrDoneExt::or_done) relay; when `signal` fires the
    /// stage stops immediately without flushing the remaining inner
    /// sequences. The output closes exactly once, when the outer source
    /// is exhausted or the signal fires.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// # async fn example() {
    /// let signal = Signal::new();
    /// let (outer_tx, outer_rx) = conduit();
    /// let flat = outer_rx.flatten(&signal);
    ///
    /// let (inner_tx, inner_rx) = conduit();
    /// outer_tx.send(inner_rx).await.unwrap();
    ///
    /// inner_tx.send(1).await.unwrap();
    /// assert_eq!(flat.recv().await, Ok(1));
    /// # }
    /// ```
    fn flatten(self, signal: &Signal) -> Receiver<T>;
}

impl<T> FlattenExt<T> for Receiver<Receiver<T>>
where
    T: Send + 'static,
{
    fn flatten(self, signal: &Signal) -> Receiver<T> {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            while let Some(inner) = util::recv_or_fired(&self, &signal).await {
                let guarded = inner.or_done(&signal);
                while let Ok(value) = guarded.recv().await {
                    if !util::deliver_or_fired(&tx, &signal, value).await {
                        return;
                    }
                }
            }
        });
        rx
    }
}
