//! Configuration module for the account ledger
//!
//! The library itself needs no configuration. The binary configures logging
//! from the environment and its own command-line flags.

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
