//! Logging utilities.
//!
//! Samples call [`init_logging`] once at the top of `main`; everything else
//! goes through the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
