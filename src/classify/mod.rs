//! WHOIS response classification.
//!
//! Registry responses are free-form text; the resolution loop only needs a
//! handful of signals out of them: does this look like a real registration
//! record, is it a conclusive "no such domain", does it point at another
//! server, and is it the shared-registry summary page that calls for a
//! disambiguated retry. Everything here is a pure function over the response
//! body; the patterns are compiled once and reused.

use std::sync::LazyLock;

use regex::Regex;

/// `Domain Name:` / `Domain:` line with a non-empty value. The presence of
/// this field is the sole gate for accepting a response as authoritative.
static DOMAIN_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*domain(?:[ \t]+name)?:[ \t]*(\S+)").expect("domain field pattern")
});

/// Negative-answer phrasings shared by the big registries.
static NOT_FOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(no match for|not found|no entries found)").expect("not-found pattern")
});

/// `whois:` field, as served by the IANA root registry.
static WHOIS_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)whois:\s+(\S+)").expect("whois field pattern"));

/// `refer:` field; alternate spelling of the referral field in root-registry
/// responses.
static REFER_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)refer:\s+(\S+)").expect("refer field pattern"));

/// `Name Server:` / `nserver:` / `Server:` lines.
static NAME_SERVER_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:name[ \t]+)?n?server:\s+(\S+)").expect("name server pattern")
});

/// `Domain Status:` / `Status:` lines. Only the first token of the value is
/// kept; registries append a policy URL after the status code.
static STATUS_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:domain[ \t]+)?status:\s+(\S+)").expect("status pattern")
});

/// Both substrings must be present for a response to count as the
/// shared-registry multi-record summary page.
const BATCH_SUMMARY_MARKERS: [&str; 2] = ["to single out one record", "look it up with"];

/// How much authority a response carries, as a total order.
///
/// Used to decide whether a referred response should replace the response
/// that contained the referral: the replacement must strictly outweigh the
/// original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResponseWeight {
    /// Conclusive negative: the registry states the domain does not exist.
    NotFound,
    /// Neither a record nor a conclusive negative.
    Inconclusive,
    /// Contains a registration-identity field; the queried server is correct
    /// for this domain.
    Authoritative,
}

/// Collects capture-group values, deduplicated case-insensitively with the
/// first occurrence winning, lower-cased.
fn capture_all(re: &Regex, text: &str) -> Vec<String> {
    let mut found = Vec::new();
    for cap in re.captures_iter(text) {
        if let Some(m) = cap.get(1) {
            let value = m.as_str().trim().to_lowercase();
            if !value.is_empty() && !found.contains(&value) {
                found.push(value);
            }
        }
    }
    found
}

/// True iff the text contains a registration-identity field
/// (`Domain Name:` or `Domain:` with a value).
pub fn is_authoritative(text: &str) -> bool {
    !text.is_empty() && DOMAIN_FIELD.is_match(text)
}

/// True iff the text matches a known "no such domain" phrasing. A match is
/// conclusive: the zone's registry answered and the domain is unregistered.
pub fn is_not_found(text: &str) -> bool {
    !text.is_empty() && NOT_FOUND.is_match(text)
}

/// Extracts the first referral target from a `whois:` field, falling back to
/// the `refer:` spelling. Lower-cased.
pub fn extract_referral(text: &str) -> Option<String> {
    capture_all(&WHOIS_FIELD, text)
        .into_iter()
        .next()
        .or_else(|| capture_all(&REFER_FIELD, text).into_iter().next())
}

/// Extracts the unique name servers mentioned in the response, in order of
/// first appearance, lower-cased.
pub fn extract_name_servers(text: &str) -> Vec<String> {
    capture_all(&NAME_SERVER_FIELD, text)
}

/// Extracts the unique domain status codes mentioned in the response, in
/// order of first appearance, lower-cased.
pub fn extract_status_codes(text: &str) -> Vec<String> {
    capture_all(&STATUS_FIELD, text)
}

/// True iff the response is the shared-registry summary page listing several
/// matching records instead of a single one. The caller should retry with
/// the `domain`-prefixed query form rather than accept the page.
pub fn is_batch_summary_page(text: &str) -> bool {
    let lower = text.to_lowercase();
    BATCH_SUMMARY_MARKERS.iter().all(|m| lower.contains(m))
}

/// Classifies a response into the [`ResponseWeight`] order.
pub fn weight(text: &str) -> ResponseWeight {
    if is_authoritative(text) {
        ResponseWeight::Authoritative
    } else if is_not_found(text) {
        ResponseWeight::NotFound
    } else {
        ResponseWeight::Inconclusive
    }
}
