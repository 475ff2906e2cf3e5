//! WHOIS line transport.
//!
//! One WHOIS exchange is a single short-lived TCP conversation: connect to
//! port 43, write the query line, read until the server closes the
//! connection. The trait exists so the resolution engine can be exercised
//! against scripted responses; [`TcpTransport`] is the real implementation.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::{MAX_RESPONSE_SIZE, WHOIS_PORT};

/// A blocking-style WHOIS query bounded by a timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `query` to `server` and returns the decoded response.
    ///
    /// Connect, write, read and timeout failures are all reported as
    /// `io::Error`; callers treat any failure as "no response from this
    /// server".
    async fn send(&self, server: &str, query: &str, timeout: Duration) -> io::Result<String>;
}

/// The production transport: a plain TCP conversation per query.
#[derive(Debug, Clone, Copy)]
pub struct TcpTransport {
    port: u16,
}

impl TcpTransport {
    /// A transport talking to the standard WHOIS port.
    pub fn new() -> Self {
        Self { port: WHOIS_PORT }
    }

    /// A transport talking to a non-standard port (local test servers).
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send(&self, server: &str, query: &str, timeout: Duration) -> io::Result<String> {
        let exchange = async {
            let mut stream = TcpStream::connect((server, self.port)).await?;
            stream.write_all(query.as_bytes()).await?;
            let mut buf = Vec::with_capacity(4096);
            // Servers close the connection after the response; the size cap
            // bounds reads from peers that do not
            (&mut stream)
                .take(MAX_RESPONSE_SIZE as u64)
                .read_to_end(&mut buf)
                .await?;
            Ok::<_, io::Error>(buf)
        };

        let buf = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("WHOIS query to {server} timed out"),
                )
            })??;

        log::trace!("{} answered with {} bytes", server, buf.len());
        Ok(decode_response(&buf))
    }
}

/// Decodes a response as UTF-8, falling back to Latin-1 for the registries
/// that still serve legacy 8-bit text.
fn decode_response(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
