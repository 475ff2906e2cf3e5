//! whois_lookup library: WHOIS server discovery and lookup
//!
//! Resolves the authoritative registration-data server for a domain over the
//! plain-text WHOIS protocol (TCP port 43) without a fixed server table:
//! candidate servers are guessed from the domain's zones, tried in order,
//! classified, and referrals are followed one hop. Servers that produce a
//! confirmed answer are remembered per zone for the lifetime of the client.
//!
//! # Example
//!
//! ```no_run
//! use whois_lookup::lookup;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! match lookup("example.com").await? {
//!     Some(text) => println!("{text}"),
//!     None => println!("example.com is not registered"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod cache;
pub mod classify;
pub mod config;
mod domain;
mod error_handling;
mod iana;
pub mod initialization;
mod resolver;
mod servers;
pub mod transport;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, WhoisError};
pub use resolver::{lookup, lookup_with_timeout, WhoisClient};
pub use transport::{TcpTransport, Transport};
