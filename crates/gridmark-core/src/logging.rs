#![forbid(unsafe_code)]

//! Logging support.
//!
//! Re-exports the `tracing` event macros when the `tracing` feature is
//! enabled. Without it, no-op macros with the same names are exported at the
//! crate root so call sites never need their own `cfg`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}
