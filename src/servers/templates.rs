//! Per-server query templates.
//!
//! Most servers accept a bare `domain\r\n` query line, but a few registries
//! require a flag or prefix to return a full single record. The table below
//! is static knowledge about those registries' query syntax; it is keyed by
//! exact server hostname and is not derived from anything.

/// Query format used when a server has no entry in [`QUERY_TEMPLATES`].
pub const DEFAULT_TEMPLATE: &str = "%s\r\n";

/// Query format that singles out the domain record on the shared-registry
/// servers that otherwise answer with a multi-record summary page.
pub const DISAMBIGUATING_TEMPLATE: &str = "domain %s\r\n";

/// Registries with non-default query syntax.
const QUERY_TEMPLATES: &[(&str, &str)] = &[
    // denic returns a minimal record unless the dn,ace types are requested
    ("whois.denic.de", "-T dn,ace %s\r\n"),
    ("whois.dk-hostmaster.dk", "--show-handles %s\r\n"),
    ("whois.internic.net", "domain = %s\r\n"),
    // /e selects English output
    ("whois.jprs.jp", "%s/e\r\n"),
    ("whois.verisign-grs.com", "domain %s\r\n"),
];

/// Returns the query template for `server`: the table entry when present,
/// the default `%s` line otherwise.
pub fn template_for(server: &str) -> &'static str {
    QUERY_TEMPLATES
        .iter()
        .find_map(|(host, template)| (*host == server).then_some(*template))
        .unwrap_or(DEFAULT_TEMPLATE)
}

/// Substitutes `domain` into a query template.
pub fn build_query(template: &str, domain: &str) -> String {
    template.replacen("%s", domain, 1)
}
