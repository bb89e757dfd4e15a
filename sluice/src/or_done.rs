// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation-aware relay - pass-through that also observes a signal.
//!
//! `or_done` is the primitive the cancellable stages are built from. It
//! forwards the source unchanged, except that once the shared [`Signal`]
//! fires the relay stops and closes its output, dropping an element it
//! was in the middle of delivering. The signal is raced at two points:
//! before each receive, and again while delivering an element already in
//! hand — a fire that lands while the consumer is slow must not pin the
//! relay to a delivery nobody will accept.

use crate::util;
use sluice_core::{conduit, Receiver, Signal};

/// Extension trait providing the `or_done` relay for conduit receivers.
pub trait OrDoneExt<T> {
    /// Forwards the source until it is exhausted or `signal` fires.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::prelude::*;
    ///
    /// # async fn example() {
    /// let signal = Signal::new();
    /// let (tx, rx) = conduit();
    /// let guarded = rx.or_done(&signal);
    ///
    /// tx.send(5).await.unwrap();
    /// assert_eq!(guarded.recv().await, Ok(5));
    ///
    /// signal.fire();
    /// // The relay lets go of the source and closes its output.
    /// assert!(guarded.recv().await.is_err());
    /// # }
    /// ```
    fn or_done(self, signal: &Signal) -> Receiver<T>;
}

impl<T> OrDoneExt<T> for Receiver<T>
where
    T: Send + 'static,
{
    fn or_done(self, signal: &Signal) -> Receiver<T> {
        let signal = signal.clone();
        let (tx, rx) = conduit();
        tokio::spawn(async move {
            while let Some(value) = util::recv_or_fired(&self, &signal).await {
                if !util::deliver_or_fired(&tx, &signal, value).await {
                    break;
                }
            }
            crate::logging::trace!("or_done: relay stopping");
        });
        rx
    }
}
