//! Configuration constants.
//!
//! Well-known server names and operational limits used throughout the
//! lookup pipeline.

use std::time::Duration;

/// Default per-lookup timeout used by [`crate::lookup`].
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// TCP port of the WHOIS service.
pub const WHOIS_PORT: u16 = 43;

/// The root-zone registry server. Queried with a bare top-level zone label
/// to discover the authoritative server for that zone.
pub const IANA_WHOIS_SERVER: &str = "whois.iana.org";

/// Fallback server appended to every candidate list. Not authoritative for
/// most zones, but answers on port 43 for a surprising number of them.
pub const DEFAULT_WHOIS_SERVER: &str = "whois.arin.net";

/// Alias zone: `<tld>.whois-servers.net` CNAMEs to the registry server for
/// many legacy top-level zones.
pub const WHOIS_SERVERS_NET_SUFFIX: &str = ".whois-servers.net";

/// Brand-protection registrar WHOIS server. Large corporate portfolios in
/// the big generic zones are often registered through it, so it is worth a
/// try there. It is registrar-wide rather than zone-specific, which is why
/// it is never written to the learned-server cache.
pub const BRAND_PROTECTION_SERVER: &str = "whois.markmonitor.com";

/// Top-level zones where the brand-protection registrar is tried.
pub const BRAND_PROTECTED_ZONES: &[&str] = &["com", "net", "org"];

/// Maximum response size read from a server (64 KiB). Registry records are
/// a few KiB; the cap bounds memory against misbehaving peers.
pub const MAX_RESPONSE_SIZE: usize = 64 * 1024;
