// Conditional logging shim: uses `tracing` when the feature is enabled,
// compiles to nothing otherwise.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{trace, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! silent {
    ($($arg:tt)*) => {
        let _ = format_args!($($arg)*);
    };
}

#[cfg(not(feature = "tracing"))]
pub(crate) use silent as trace;
#[cfg(not(feature = "tracing"))]
pub(crate) use silent as warn;
