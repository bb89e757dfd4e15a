// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Composable concurrent conduit operators.
//!
//! This crate provides the operator set for building producer/consumer
//! pipelines out of [conduits](sluice_core::conduit): each operator spawns
//! a stage (a task owning exactly one output side), reads from the
//! endpoints it is given, and hands the caller the read side of its
//! output. Stages communicate only through conduits; a shared [`Signal`]
//! can short-circuit every cancellation-aware stage at once.
//!
//! # Operator Categories
//!
//! ## Transformation
//!
//! - [`map`](MapExt::map): apply a function to every element, order preserving
//! - [`reduce`](ReduceExt::reduce): fold the whole sequence into one value
//!
//! ## Filtering and truncation
//!
//! - [`skip_n`](SkipExt::skip_n) / [`take_n`](TakeExt::take_n): drop or keep a counted prefix
//! - [`skip_while`](SkipExt::skip_while) / [`take_while`](TakeExt::take_while): drop or keep a leading run
//! - [`skip_matching`](SkipExt::skip_matching) / [`take_matching`](TakeExt::take_matching): per-element filters
//!
//! ## Fan-in
//!
//! - [`merge`]: interleave several sources into one output
//! - [`flatten`](FlattenExt::flatten): concatenate a sequence of sequences
//!
//! ## Broadcast and distribution
//!
//! - [`tee`](TeeExt::tee) / [`tee_async`](TeeExt::tee_async) / [`tee_random`](TeeExt::tee_random):
//!   every element to every output, with three delivery disciplines
//! - [`fan_out`](FanOutExt::fan_out) / [`fan_out_random`](FanOutExt::fan_out_random):
//!   every element to exactly one output
//!
//! ## Cancellation
//!
//! - [`or_done`](OrDoneExt::or_done): pass-through that also observes a [`Signal`]
//!
//! # Ownership rules
//!
//! Every stage owns the sender side of its output and closes it exactly
//! once, by dropping it when the stage winds down. Broadcast and
//! distribute operators take the caller's senders for the duration of the
//! call and close all of them the same way once the source is exhausted.
//! No operator closes a conduit it does not own.
//!
//! # Cancellation model
//!
//! The relay ([`or_done`](OrDoneExt::or_done)), [`flatten`](FlattenExt::flatten),
//! and the six windowing operators observe a [`Signal`] and stop promptly
//! when it fires, racing it both against the next receive and against the
//! delivery of an element already in hand. The broadcast, distribute, and
//! merge operators deliberately do not: once started they run until their
//! source is exhausted. Callers who need to cut such a stage short
//! compose cancellation upstream, e.g. by feeding it through
//! `or_done` first.
//!
//! # Example
//!
//! ```
//! use sluice::prelude::*;
//!
//! # async fn example() {
//! let signal = Signal::new();
//! let (tx, rx) = conduit();
//!
//! let trimmed = rx
//!     .skip_n(&signal, 1)
//!     .take_matching(&signal, |value: &i32| value % 2 == 0)
//!     .map(|value| value * 10);
//!
//! tx.send(1).await.unwrap(); // skipped
//! tx.send(2).await.unwrap();
//! tx.send(3).await.unwrap(); // filtered out
//! tx.send(4).await.unwrap();
//! drop(tx);
//!
//! assert_eq!(trimmed.recv().await, Ok(20));
//! assert_eq!(trimmed.recv().await, Ok(40));
//! assert!(trimmed.recv().await.is_err());
//! # }
//! ```

pub mod fan_out;
pub mod flatten;
mod logging;
pub mod map;
pub mod merge;
pub mod or_done;
pub mod prelude;
pub mod reduce;
pub mod skip;
pub mod take;
pub mod tee;
mod util;

pub use self::fan_out::FanOutExt;
pub use self::flatten::FlattenExt;
pub use self::map::MapExt;
pub use self::merge::merge;
pub use self::or_done::OrDoneExt;
pub use self::reduce::ReduceExt;
pub use self::skip::SkipExt;
pub use self::take::TakeExt;
pub use self::tee::TeeExt;

pub use sluice_core::{conduit, FanError, Receiver, RecvError, SendError, Sender, Signal};
