//! Application initialization utilities.
//!
//! This module provides initialization functions for application components:
//! - Logger setup with configurable format

mod logger;

pub use logger::init_logger_with;
