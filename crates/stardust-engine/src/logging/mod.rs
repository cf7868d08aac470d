//! Logger setup for binaries.
//!
//! The engine only ever logs through the `log` facade; a binary decides
//! when (and whether) to install the `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
