// Classifier tests over realistic registry responses.

use super::*;

const IANA_COM: &str = "\
% IANA WHOIS server\r
% for more information on IANA, visit http://www.iana.org\r
% This query returned 1 object\r
\r
domain:       COM\r
\r
organisation: VeriSign Global Registry Services\r
\r
nserver:      A.GTLD-SERVERS.NET 192.5.6.30 2001:503:a83e:0:0:0:2:30\r
nserver:      B.GTLD-SERVERS.NET 192.33.14.30 2001:503:231d:0:0:0:2:30\r
\r
whois:        whois.verisign-grs.com\r
\r
status:       ACTIVE\r
\r
created:      1985-01-01\r
changed:      2023-12-07\r
source:       IANA\r
";

const REGISTRY_RECORD: &str = "\
   Domain Name: EXAMPLE.COM\r
   Registry Domain ID: 2336799_DOMAIN_COM-VRSN\r
   Registrar WHOIS Server: whois.iana.org\r
   Updated Date: 2024-08-14T07:01:34Z\r
   Creation Date: 1995-08-14T04:00:00Z\r
   Registry Expiry Date: 2025-08-13T04:00:00Z\r
   Registrar: RESERVED-Internet Assigned Numbers Authority\r
   Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited\r
   Domain Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited\r
   Domain Status: clientUpdateProhibited https://icann.org/epp#clientUpdateProhibited\r
   Name Server: A.IANA-SERVERS.NET\r
   Name Server: B.IANA-SERVERS.NET\r
   Name Server: a.iana-servers.net\r
   DNSSEC: signedDelegation\r
";

const DENIC_RECORD: &str = "\
Domain: asgard.de\r
Nserver: ns1.asgard.de\r
Nserver: ns2.asgard.de\r
Status: connect\r
Changed: 2020-03-01T10:00:00+01:00\r
";

const NO_MATCH: &str = "\
No match for \"QZWXEC-DOES-NOT-EXIST.COM\".\r
>>> Last update of whois database: 2025-03-04T13:38:57Z <<<\r
";

const BATCH_SUMMARY: &str = "\
Aborting search 50 records found .....\r
GOOGLE.COM.AR\r
GOOGLE.COM.AU\r
GOOGLE.COM.BR\r
\r
To single out one record, look it up with \"xxx\", where xxx is one of the\r
records displayed above. If the records are the same, look them up with\r
\"=xxx\" to receive a full display for each record.\r
";

#[test]
fn test_is_authoritative_registry_record() {
    assert!(is_authoritative(REGISTRY_RECORD));
}

#[test]
fn test_is_authoritative_bare_domain_field() {
    assert!(is_authoritative(DENIC_RECORD));
    assert!(is_authoritative("Domain Name: example.com\nStatus: active"));
}

#[test]
fn test_is_authoritative_negative() {
    assert!(!is_authoritative(""));
    assert!(!is_authoritative(NO_MATCH));
    assert!(!is_authoritative(BATCH_SUMMARY));
    // A field with no value does not count
    assert!(!is_authoritative("Domain Name:\nDomain:\n"));
    // Prefixed field names do not count
    assert!(!is_authoritative("Registry Domain ID: 12345\n"));
}

#[test]
fn test_is_not_found_phrasings() {
    assert!(is_not_found(NO_MATCH));
    assert!(is_not_found("No match for DOMAIN.TLD"));
    assert!(is_not_found("NOT FOUND\n"));
    assert!(is_not_found("%ERROR:101: no entries found\n"));
    assert!(!is_not_found(REGISTRY_RECORD));
    assert!(!is_not_found(""));
}

#[test]
fn test_extract_referral_whois_field() {
    assert_eq!(
        extract_referral(IANA_COM),
        Some("whois.verisign-grs.com".to_string())
    );
    assert_eq!(
        extract_referral("Whois: WHOIS.NIC.TLD\n"),
        Some("whois.nic.tld".to_string())
    );
}

#[test]
fn test_extract_referral_refer_fallback() {
    assert_eq!(
        extract_referral("refer:        whois.jprs.jp\n"),
        Some("whois.jprs.jp".to_string())
    );
    // whois: wins over refer: when both are present
    let both = "refer:  whois.other.example\nwhois:  whois.first.example\n";
    assert_eq!(extract_referral(both), Some("whois.first.example".to_string()));
}

#[test]
fn test_extract_referral_ignores_prefixed_fields() {
    // "Registrar WHOIS Server:" must not be mistaken for a referral field
    assert_eq!(extract_referral(REGISTRY_RECORD), None);
}

#[test]
fn test_extract_name_servers_dedup_and_order() {
    let servers = extract_name_servers(REGISTRY_RECORD);
    // Case-insensitive dedup, first occurrence wins, lower-cased. The
    // "Registrar WHOIS Server:" line also matches the server pattern.
    assert_eq!(
        servers,
        vec![
            "whois.iana.org".to_string(),
            "a.iana-servers.net".to_string(),
            "b.iana-servers.net".to_string(),
        ]
    );
}

#[test]
fn test_extract_name_servers_nserver_spelling() {
    assert_eq!(
        extract_name_servers(DENIC_RECORD),
        vec!["ns1.asgard.de".to_string(), "ns2.asgard.de".to_string()]
    );
}

#[test]
fn test_extract_status_codes() {
    assert_eq!(
        extract_status_codes(REGISTRY_RECORD),
        vec![
            "clientdeleteprohibited".to_string(),
            "clienttransferprohibited".to_string(),
            "clientupdateprohibited".to_string(),
        ]
    );
    assert_eq!(extract_status_codes(IANA_COM), vec!["active".to_string()]);
}

#[test]
fn test_is_batch_summary_page() {
    assert!(is_batch_summary_page(BATCH_SUMMARY));
    // Both markers are required
    assert!(!is_batch_summary_page("To single out one record\n"));
    assert!(!is_batch_summary_page("look it up with \"xxx\"\n"));
    assert!(!is_batch_summary_page(REGISTRY_RECORD));
}

#[test]
fn test_weight_ordering() {
    assert!(ResponseWeight::NotFound < ResponseWeight::Inconclusive);
    assert!(ResponseWeight::Inconclusive < ResponseWeight::Authoritative);

    assert_eq!(weight(REGISTRY_RECORD), ResponseWeight::Authoritative);
    assert_eq!(weight(NO_MATCH), ResponseWeight::NotFound);
    assert_eq!(weight("% quota exceeded, try again later\n"), ResponseWeight::Inconclusive);
}
