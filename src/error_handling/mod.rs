//! Error types for lookups and startup.
//!
//! Transport-level failures (connect, write, read, timeout) are deliberately
//! not represented here: they are `std::io::Error` values handled inside the
//! resolution loop, which moves on to the next candidate server instead of
//! failing the lookup.

mod types;

// Re-export public API
pub use types::{InitializationError, WhoisError};
