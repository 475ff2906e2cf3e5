//! Candidate server generation.
//!
//! Given a validated domain, produces the ordered list of WHOIS servers to
//! try. Ordering goes from most specific to least: learned servers for the
//! second-level zone, naming-convention guesses for it, then the same pair
//! for the top-level zone, the fixed fallbacks, the brand-protection
//! registrar for the big generic zones, and finally whatever the root-zone
//! registry reports.

mod templates;

use std::time::Duration;

use crate::cache::ZoneCache;
use crate::config::{
    BRAND_PROTECTED_ZONES, BRAND_PROTECTION_SERVER, DEFAULT_WHOIS_SERVER, WHOIS_SERVERS_NET_SUFFIX,
};
use crate::domain::DomainName;
use crate::iana;
use crate::transport::Transport;

pub use templates::{build_query, template_for, DISAMBIGUATING_TEMPLATE};

/// One server to try, plus the zone it would be authoritative for. The zone
/// is the key under which the server is cached if its answer is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// WHOIS server hostname.
    pub server: String,
    /// Zone this candidate would answer for (`com`, `edu.ru`, ...).
    pub zone: String,
}

fn push_candidate(out: &mut Vec<Candidate>, server: String, zone: &str) {
    let candidate = Candidate {
        server,
        zone: zone.to_string(),
    };
    if !out.contains(&candidate) {
        out.push(candidate);
    }
}

/// The candidates derivable without network traffic: learned servers,
/// naming-convention guesses, fixed fallbacks. Never empty for a valid
/// domain.
pub fn base_candidates(domain: &DomainName, server_cache: &ZoneCache) -> Vec<Candidate> {
    let mut out = Vec::new();
    let tld = domain.top_level_zone();

    if let Some(sld) = domain.second_level_zone() {
        if let Some(learned) = server_cache.get(&sld) {
            push_candidate(&mut out, learned, &sld);
        }
        push_candidate(&mut out, format!("whois.nic.{sld}"), &sld);
        push_candidate(&mut out, format!("whois.{sld}"), &sld);
    }

    if let Some(learned) = server_cache.get(tld) {
        push_candidate(&mut out, learned, tld);
    }
    push_candidate(&mut out, format!("whois.nic.{tld}"), tld);
    push_candidate(&mut out, format!("whois.{tld}"), tld);
    push_candidate(&mut out, DEFAULT_WHOIS_SERVER.to_string(), tld);
    push_candidate(&mut out, format!("{tld}{WHOIS_SERVERS_NET_SUFFIX}"), tld);

    if BRAND_PROTECTED_ZONES.contains(&tld) {
        push_candidate(&mut out, BRAND_PROTECTION_SERVER.to_string(), tld);
    }

    out
}

/// The full candidate list: [`base_candidates`] plus the server reported by
/// the root-zone registry for the top-level zone. The root-zone answer is
/// cached in `iana_cache`, so at most one root query is made per zone per
/// client.
pub async fn candidates<T: Transport>(
    domain: &DomainName,
    server_cache: &ZoneCache,
    iana_cache: &ZoneCache,
    transport: &T,
    timeout: Duration,
) -> Vec<Candidate> {
    let mut out = base_candidates(domain, server_cache);
    let tld = domain.top_level_zone();

    let root_zone_server = match iana_cache.get(tld) {
        Some(server) => Some(server),
        None => {
            let discovered = iana::lookup_zone_server(transport, tld, timeout).await;
            if let Some(server) = &discovered {
                iana_cache.insert(tld, server);
            }
            discovered
        }
    };
    if let Some(server) = root_zone_server {
        push_candidate(&mut out, server, tld);
    }

    log::debug!(
        "Candidate servers for {}: {}",
        domain,
        out.iter()
            .map(|c| c.server.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    out
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
