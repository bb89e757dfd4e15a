// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conduit construction and endpoint types.
//!
//! A conduit is the communication object between two pipeline stages: a
//! [`Sender`] half owned by the producing stage and a [`Receiver`] half
//! handed to the consumer. Conduits are capacity-1 bounded channels, the
//! closest async rendition of a rendezvous channel: a producer can stage
//! at most one element ahead of its consumer, so backpressure couples
//! adjacent stages with one element of slack.
//!
//! # Close discipline
//!
//! A conduit is closed when its last [`Sender`] is dropped. Every pending
//! and future receive then drains the staged element (if any) and observes
//! end-of-sequence. Because closing is tied to ownership, a conduit cannot
//! be closed twice: the stage that owns the sender closes it exactly once
//! by letting it go. Sending after the consumer side has disappeared
//! returns an error rather than stalling, which is how stages learn that
//! their consumer has detached.

pub use async_channel::{Receiver, RecvError, SendError, Sender};

/// Creates a connected pair of conduit endpoints.
///
/// # Examples
///
/// ```
/// use sluice_core::conduit;
///
/// # async fn example() {
/// let (tx, rx) = conduit();
///
/// tx.send(7).await.unwrap();
/// assert_eq!(rx.recv().await, Ok(7));
///
/// drop(tx);
/// assert!(rx.recv().await.is_err());
/// # }
/// ```
pub fn conduit<T>() -> (Sender<T>, Receiver<T>) {
    async_channel::bounded(1)
}
