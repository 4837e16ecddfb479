//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade.
//! The fade logic itself only emits `debug!`/`trace!` records (activity
//! transitions, overlay re-syncs); no backend is imposed on library
//! consumers, who may initialize their own.

mod init;

pub use init::{init_logging, LoggingConfig};
