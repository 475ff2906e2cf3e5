//! Domain name validation and zone derivation.
//!
//! A lookup target must have at least two dot-separated labels; Unicode
//! names are mapped to their ASCII-compatible form up front so that every
//! later stage (candidate generation, query building, caching) works on a
//! single canonical spelling.

use crate::error_handling::WhoisError;

/// A validated, ASCII-normalized domain name.
///
/// Construction enforces the two invariants the resolution pipeline relies
/// on: the name has at least two non-empty labels, and it is pure ASCII
/// (IDN labels are punycode-encoded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    ascii: String,
}

impl DomainName {
    /// Validates `domain` and converts it to its ASCII form.
    ///
    /// # Errors
    ///
    /// Returns [`WhoisError::InvalidDomain`] when the name has fewer than two
    /// labels, contains an empty label, or fails IDN-to-ASCII conversion.
    pub fn parse(domain: &str) -> Result<Self, WhoisError> {
        let trimmed = domain.trim().trim_end_matches('.');
        let ascii = idna::domain_to_ascii_cow(trimmed.as_bytes(), idna::AsciiDenyList::URL)
            .map_err(|e| WhoisError::InvalidDomain {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

        let ascii = ascii.into_owned();
        let labels: Vec<&str> = ascii.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
            return Err(WhoisError::InvalidDomain {
                domain: domain.to_string(),
                reason: "expected at least two dot-separated labels".to_string(),
            });
        }

        Ok(Self { ascii })
    }

    /// The ASCII form of the domain.
    pub fn as_str(&self) -> &str {
        &self.ascii
    }

    /// The top-level zone: the last label (`com` for `example.com`).
    pub fn top_level_zone(&self) -> &str {
        self.ascii.rsplit('.').next().unwrap_or(&self.ascii)
    }

    /// The second-level zone: the last two labels (`edu.ru` for
    /// `russia.edu.ru`). `None` for two-label domains.
    pub fn second_level_zone(&self) -> Option<String> {
        let labels: Vec<&str> = self.ascii.split('.').collect();
        if labels.len() >= 3 {
            Some(format!(
                "{}.{}",
                labels[labels.len() - 2],
                labels[labels.len() - 1]
            ))
        } else {
            None
        }
    }
}

impl std::fmt::Display for DomainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.ascii)
    }
}
