// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Usage violations reported by broadcast and distribute operators.

/// Error returned when a broadcast or distribute operator is misused.
///
/// Most pipeline faults are prevented by ownership (a conduit cannot be
/// closed twice) or surface as an observed disconnect (a send to a conduit
/// whose consumers are gone fails). The remaining violation a caller can
/// commit is handing a fan-out stage nothing to fan out to, which is
/// rejected up front instead of stalling the pipeline.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum FanError {
    /// The caller supplied an empty set of output conduits.
    #[error("at least one output conduit is required")]
    NoOutputs,
}
