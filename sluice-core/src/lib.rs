// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Primitives shared by every sluice pipeline stage.
//!
//! This crate provides the three building blocks the operator crate
//! composes:
//!
//! - [`conduit`]: the closable, backpressured channel connecting stages
//! - [`Signal`]: the shared close-once cancellation primitive
//! - [`FanError`]: the usage violation reported by broadcast/distribute
//!   entry points
//!
//! Nothing here spawns tasks; the operators in the `sluice` crate do.

pub mod conduit;
pub mod error;
pub mod signal;

pub use self::conduit::{conduit, Receiver, RecvError, SendError, Sender};
pub use self::error::FanError;
pub use self::signal::Signal;
