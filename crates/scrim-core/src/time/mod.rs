//! Timing utilities.
//!
//! Everything here is driven by caller-supplied `Instant`s rather than an
//! internal clock, so the event loop owns time and tests can advance it
//! without sleeping.

mod debounce;

pub use debounce::DebounceTimer;
