//! Root-zone discovery.
//!
//! The IANA root registry answers a bare top-level zone query with the
//! canonical WHOIS server for that zone. This is the last-resort candidate
//! source when none of the naming-convention guesses pan out.

use std::time::Duration;

use crate::classify;
use crate::config::IANA_WHOIS_SERVER;
use crate::servers::{build_query, template_for};
use crate::transport::Transport;

/// Queries the root registry for the authoritative server of `zone`.
///
/// Returns `None` on transport failure or when the response carries no
/// referral field. Performs no caching; the caller owns the cache.
pub async fn lookup_zone_server<T: Transport>(
    transport: &T,
    zone: &str,
    timeout: Duration,
) -> Option<String> {
    let query = build_query(template_for(IANA_WHOIS_SERVER), zone);
    match transport.send(IANA_WHOIS_SERVER, &query, timeout).await {
        Ok(text) => {
            let server = classify::extract_referral(&text);
            match &server {
                Some(server) => log::debug!("Root registry reports {server} for zone {zone}"),
                None => log::debug!("Root registry has no WHOIS server on file for zone {zone}"),
            }
            server
        }
        Err(e) => {
            log::debug!("Root registry query for zone {zone} failed: {e}");
            None
        }
    }
}
