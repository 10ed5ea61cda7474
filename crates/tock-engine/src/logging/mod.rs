//! Logging utilities.
//!
//! Libraries in this workspace log through the `log` facade only; binaries call
//! [`init_logging`] to install `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
