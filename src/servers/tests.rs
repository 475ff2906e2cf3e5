// Candidate generation and template tests.

use super::*;

fn parsed(domain: &str) -> DomainName {
    DomainName::parse(domain).unwrap()
}

fn server_names(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.server.as_str()).collect()
}

#[test]
fn test_base_candidates_two_label_domain() {
    let cache = ZoneCache::new();
    let candidates = base_candidates(&parsed("example.com"), &cache);
    assert_eq!(
        server_names(&candidates),
        vec![
            "whois.nic.com",
            "whois.com",
            "whois.arin.net",
            "com.whois-servers.net",
            "whois.markmonitor.com",
        ]
    );
    assert!(candidates.iter().all(|c| c.zone == "com"));
}

#[test]
fn test_base_candidates_second_level_zone_first() {
    let cache = ZoneCache::new();
    let candidates = base_candidates(&parsed("russia.edu.ru"), &cache);
    assert_eq!(
        server_names(&candidates),
        vec![
            "whois.nic.edu.ru",
            "whois.edu.ru",
            "whois.nic.ru",
            "whois.ru",
            "whois.arin.net",
            "ru.whois-servers.net",
        ]
    );
    // Second-level candidates carry the second-level zone as their cache key
    assert_eq!(candidates[0].zone, "edu.ru");
    assert_eq!(candidates[1].zone, "edu.ru");
    assert_eq!(candidates[2].zone, "ru");
}

#[test]
fn test_base_candidates_never_empty_and_fallbacks_present() {
    let cache = ZoneCache::new();
    for domain in ["example.com", "example.fr", "a.b.c.d.co.uk", "x.yz"] {
        let candidates = base_candidates(&parsed(domain), &cache);
        assert!(!candidates.is_empty(), "{domain}");
        let names = server_names(&candidates);
        assert!(names.contains(&"whois.arin.net"), "{domain}");
        assert!(
            names.iter().any(|n| n.ends_with(".whois-servers.net")),
            "{domain}"
        );
    }
}

#[test]
fn test_base_candidates_brand_protection_gating() {
    let cache = ZoneCache::new();
    for tld in ["com", "net", "org"] {
        let candidates = base_candidates(&parsed(&format!("example.{tld}")), &cache);
        assert_eq!(
            server_names(&candidates).last(),
            Some(&"whois.markmonitor.com")
        );
    }
    let candidates = base_candidates(&parsed("example.fr"), &cache);
    assert!(!server_names(&candidates).contains(&"whois.markmonitor.com"));
}

#[test]
fn test_base_candidates_warm_cache_front_loads() {
    let cache = ZoneCache::new();
    cache.insert("com", "whois.verisign-grs.com");
    let candidates = base_candidates(&parsed("example.com"), &cache);
    assert_eq!(candidates[0].server, "whois.verisign-grs.com");
    assert_eq!(candidates[0].zone, "com");
}

#[test]
fn test_base_candidates_warm_second_level_cache_precedes_everything() {
    let cache = ZoneCache::new();
    cache.insert("edu.ru", "whois.informika.ru");
    cache.insert("ru", "whois.tcinet.ru");
    let candidates = base_candidates(&parsed("russia.edu.ru"), &cache);
    let names = server_names(&candidates);
    assert_eq!(names[0], "whois.informika.ru");
    // The learned top-level server sits between the second-level guesses and
    // the top-level guesses
    assert_eq!(
        &names[..5],
        &[
            "whois.informika.ru",
            "whois.nic.edu.ru",
            "whois.edu.ru",
            "whois.tcinet.ru",
            "whois.nic.ru",
        ]
    );
}

#[test]
fn test_base_candidates_cached_server_not_repeated_for_same_zone() {
    let cache = ZoneCache::new();
    // Learned entry coincides with a naming-convention guess
    cache.insert("com", "whois.nic.com");
    let candidates = base_candidates(&parsed("example.com"), &cache);
    let count = candidates
        .iter()
        .filter(|c| c.server == "whois.nic.com")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_template_for_quirky_registries() {
    assert_eq!(template_for("whois.denic.de"), "-T dn,ace %s\r\n");
    assert_eq!(template_for("whois.verisign-grs.com"), "domain %s\r\n");
    assert_eq!(template_for("whois.internic.net"), "domain = %s\r\n");
    assert_eq!(template_for("whois.jprs.jp"), "%s/e\r\n");
}

#[test]
fn test_template_for_default() {
    assert_eq!(template_for("whois.nic.fr"), "%s\r\n");
    // Exact-hostname match only
    assert_eq!(template_for("denic.de"), "%s\r\n");
}

#[test]
fn test_build_query() {
    assert_eq!(build_query("%s\r\n", "example.com"), "example.com\r\n");
    assert_eq!(
        build_query("-T dn,ace %s\r\n", "asgard.de"),
        "-T dn,ace asgard.de\r\n"
    );
    assert_eq!(
        build_query(DISAMBIGUATING_TEMPLATE, "example.com"),
        "domain example.com\r\n"
    );
}
