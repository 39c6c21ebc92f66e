//! Logging setup.
//!
//! Everything in the engine logs through the `log` facade; this module only
//! decides which backend receives it.

mod init;

pub use init::{init_logging, LoggingConfig};
