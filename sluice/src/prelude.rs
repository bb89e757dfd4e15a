// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the operator traits and primitives.
//!
//! Import this module for convenient access to the whole operator set:
//!
//! ```ignore
//! use sluice::prelude::*;
//!
//! let trimmed = rx
//!     .or_done(&signal)
//!     .skip_n(&signal, 10)
//!     .take_while(&signal, |value| value.is_fresh())
//!     .map(normalize);
//! ```

pub use crate::fan_out::FanOutExt;
pub use crate::flatten::FlattenExt;
pub use crate::map::MapExt;
pub use crate::merge::merge;
pub use crate::or_done::OrDoneExt;
pub use crate::reduce::ReduceExt;
pub use crate::skip::SkipExt;
pub use crate::take::TakeExt;
pub use crate::tee::TeeExt;

pub use sluice_core::{conduit, FanError, Receiver, RecvError, SendError, Sender, Signal};
