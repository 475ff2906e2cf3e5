//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors a WHOIS lookup can surface to the caller.
///
/// A confirmed "no such domain" answer is not an error; it is reported as
/// `Ok(None)` by the lookup functions. Only the two conditions below fail a
/// lookup outright.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// The domain has fewer than two labels, an empty label, or cannot be
    /// converted to its ASCII form. No network activity is attempted.
    #[error("invalid domain name '{domain}': {reason}")]
    InvalidDomain {
        /// The domain as supplied by the caller.
        domain: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Every candidate server was tried and none produced an authoritative
    /// record or a conclusive not-found answer.
    #[error("no WHOIS server found for '{domain}'")]
    NoServerFound {
        /// The (ASCII) domain that was being resolved.
        domain: String,
    },
}
