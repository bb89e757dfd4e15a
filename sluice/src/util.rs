// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Relay primitives shared by the cancellation-aware stages.

use sluice_core::{FanError, Receiver, Sender, Signal};

/// Receives the next element unless the signal fires first.
///
/// `None` means the stage should stop: either the source is exhausted or
/// the signal has fired. Which side wins a simultaneous race is up to the
/// scheduler, matching the non-deterministic choice the contract allows.
pub(crate) async fn recv_or_fired<T>(source: &Receiver<T>, signal: &Signal) -> Option<T> {
    tokio::select! {
        _ = signal.fired() => None,
        received = source.recv() => received.ok(),
    }
}

/// Delivers an element already in hand unless the signal fires first.
///
/// This is the second half of the relay race: a fire that lands while the
/// consumer is not ready must not leave the stage blocked on a delivery
/// nobody will accept. The element is dropped in that case. Returns
/// `false` when the stage should stop (fired, or the consumer is gone).
pub(crate) async fn deliver_or_fired<T>(output: &Sender<T>, signal: &Signal, value: T) -> bool {
    tokio::select! {
        _ = signal.fired() => false,
        delivered = output.send(value) => delivered.is_ok(),
    }
}

/// Rejects an empty output set before a fan-out stage spawns.
pub(crate) fn require_outputs<T>(outputs: &[Sender<T>]) -> Result<(), FanError> {
    if outputs.is_empty() {
        Err(FanError::NoOutputs)
    } else {
        Ok(())
    }
}
