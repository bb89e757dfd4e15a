//! Test collaborators for the sluice workspace: value feeders,
//! timeout-guarded assertions, and sample domain data.

pub mod helpers;
pub mod test_data;

pub use helpers::{assert_closed, assert_silent, collect, conduits, feed, recv_within};
pub use test_data::Parcel;
