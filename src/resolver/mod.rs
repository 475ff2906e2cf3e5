//! Resolution engine.
//!
//! Drives the try-in-order loop over candidate servers: resolve the query
//! template for a candidate, send the query, patch up the two per-registry
//! quirks (summary pages, referrals), classify the result, and either stop
//! or move on. A candidate that fails at the transport level is skipped; the
//! lookup only fails once every candidate has been exhausted.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use crate::cache::ZoneCache;
use crate::classify::{self, ResponseWeight};
use crate::config::{BRAND_PROTECTION_SERVER, DEFAULT_LOOKUP_TIMEOUT};
use crate::domain::DomainName;
use crate::error_handling::WhoisError;
use crate::servers::{self, Candidate};
use crate::transport::{TcpTransport, Transport};

/// Outcome of querying one candidate server.
enum Attempt {
    /// Confirmed record; `server` is the host that actually produced it
    /// (the referred server when a referral won).
    Authoritative { text: String, server: String },
    /// Conclusive negative from the zone's registry.
    NotFound,
    /// No response, empty response, or an unclassifiable page.
    Inconclusive,
}

/// A WHOIS lookup client.
///
/// Owns the learned-server and root-zone caches; both grow as lookups
/// succeed and are dropped with the client. One client can serve concurrent
/// lookups from multiple tasks.
///
/// # Example
///
/// ```no_run
/// use whois_lookup::WhoisClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WhoisClient::new();
/// match client.lookup("example.com").await? {
///     Some(text) => println!("{text}"),
///     None => println!("not registered"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct WhoisClient<T: Transport = TcpTransport> {
    transport: T,
    server_cache: ZoneCache,
    iana_cache: ZoneCache,
}

impl WhoisClient<TcpTransport> {
    /// A client using the real TCP transport and empty caches.
    pub fn new() -> Self {
        Self::with_transport(TcpTransport::new())
    }
}

impl Default for WhoisClient<TcpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> WhoisClient<T> {
    /// A client over a custom transport. Used by tests to script responses;
    /// also the hook for talking to WHOIS servers on non-standard ports.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            server_cache: ZoneCache::new(),
            iana_cache: ZoneCache::new(),
        }
    }

    /// Looks up `domain` with the default timeout.
    ///
    /// See [`lookup_with_timeout`](Self::lookup_with_timeout).
    pub async fn lookup(&self, domain: &str) -> Result<Option<String>, WhoisError> {
        self.lookup_with_timeout(domain, DEFAULT_LOOKUP_TIMEOUT).await
    }

    /// Looks up `domain`, bounding each candidate-server interaction by
    /// `timeout`.
    ///
    /// Returns the raw text of the first authoritative response, or `None`
    /// when a registry conclusively reports the domain unregistered.
    ///
    /// # Errors
    ///
    /// [`WhoisError::InvalidDomain`] for malformed input;
    /// [`WhoisError::NoServerFound`] when every candidate has been tried
    /// without an authoritative or not-found answer.
    pub async fn lookup_with_timeout(
        &self,
        domain: &str,
        timeout: Duration,
    ) -> Result<Option<String>, WhoisError> {
        let domain = DomainName::parse(domain)?;
        log::info!("Looking up WHOIS record for {domain}");

        let candidates = servers::candidates(
            &domain,
            &self.server_cache,
            &self.iana_cache,
            &self.transport,
            timeout,
        )
        .await;

        for candidate in &candidates {
            match self.try_candidate(&domain, candidate, timeout).await {
                Attempt::Authoritative { text, server } => {
                    if server != BRAND_PROTECTION_SERVER {
                        self.server_cache.insert(&candidate.zone, &server);
                    }
                    log::info!("Authoritative answer for {domain} from {server}");
                    return Ok(Some(text));
                }
                Attempt::NotFound => {
                    log::info!("{domain} is not registered per {}", candidate.server);
                    return Ok(None);
                }
                Attempt::Inconclusive => continue,
            }
        }

        Err(WhoisError::NoServerFound {
            domain: domain.as_str().to_string(),
        })
    }

    /// One full interaction with a candidate: query, summary-page retry,
    /// single-hop referral, classification. The whole interaction shares one
    /// time budget derived from `timeout`.
    async fn try_candidate(
        &self,
        domain: &DomainName,
        candidate: &Candidate,
        timeout: Duration,
    ) -> Attempt {
        let start = Instant::now();
        let template = servers::template_for(&candidate.server);
        let query = servers::build_query(template, domain.as_str());

        let mut text = match self.transport.send(&candidate.server, &query, timeout).await {
            Ok(text) => text,
            Err(e) => {
                log::debug!("No response from {}: {e}", candidate.server);
                return Attempt::Inconclusive;
            }
        };
        if text.is_empty() {
            return Attempt::Inconclusive;
        }
        let mut server = candidate.server.clone();

        // A shared-registry summary page means the plain query matched
        // several records; ask again for the domain record specifically
        if classify::is_batch_summary_page(&text) {
            log::debug!("{server} answered with a multi-record summary page, retrying");
            let retry_query =
                servers::build_query(servers::DISAMBIGUATING_TEMPLATE, domain.as_str());
            let remaining = timeout.saturating_sub(start.elapsed());
            match self.transport.send(&server, &retry_query, remaining).await {
                Ok(retried) if !retried.is_empty() => text = retried,
                Ok(_) => {}
                Err(e) => log::debug!("Summary-page retry against {server} failed: {e}"),
            }
        }

        // Single hop: if the response names another server, ask it too and
        // keep whichever answer carries more authority
        if let Some(referred) = classify::extract_referral(&text) {
            if referred != server {
                let referred_query =
                    servers::build_query(servers::template_for(&referred), domain.as_str());
                let remaining = timeout.saturating_sub(start.elapsed());
                match self.transport.send(&referred, &referred_query, remaining).await {
                    Ok(referred_text)
                        if classify::weight(&referred_text) > classify::weight(&text) =>
                    {
                        log::debug!("Referred server {referred} outweighs {server}");
                        text = referred_text;
                        server = referred;
                    }
                    Ok(_) => {
                        log::debug!("Keeping answer from {server} over referral {referred}")
                    }
                    Err(e) => log::debug!("Referral query to {referred} failed: {e}"),
                }
            }
        }

        match classify::weight(&text) {
            ResponseWeight::Authoritative => Attempt::Authoritative { text, server },
            ResponseWeight::NotFound => Attempt::NotFound,
            ResponseWeight::Inconclusive => Attempt::Inconclusive,
        }
    }
}

static DEFAULT_CLIENT: LazyLock<WhoisClient> = LazyLock::new(WhoisClient::new);

/// Looks up `domain` with the default timeout, using a process-wide client
/// whose caches persist across calls.
pub async fn lookup(domain: &str) -> Result<Option<String>, WhoisError> {
    DEFAULT_CLIENT.lookup(domain).await
}

/// Looks up `domain` with an explicit timeout, using the process-wide
/// client.
pub async fn lookup_with_timeout(
    domain: &str,
    timeout: Duration,
) -> Result<Option<String>, WhoisError> {
    DEFAULT_CLIENT.lookup_with_timeout(domain, timeout).await
}
