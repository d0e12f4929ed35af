use std::collections::{HashMap, HashSet};

use crate::error::AppError;
use crate::types::FeatureRecord;
use crate::url_parse::ParsedUrl;

const SUSPICIOUS_TLDS: &[&str] = &[
    "zip", "review", "country", "kim", "cricket", "science", "work", "party",
    "gq", "cf", "ml", "ga", "tk", "xyz", "top", "loan", "wang", "mom", "date",
    "men", "click",
];

const SHORTENERS: &[&str] = &[
    "bit.ly", "tinyurl.com", "t.co", "goo.gl", "is.gd", "buff.ly", "ow.ly",
    "bit.do", "cutt.ly", "rebrand.ly", "shorte.st",
];

const BRAND_WORDS: &[&str] = &[
    "login", "verify", "secure", "update", "reset", "account", "wallet",
    "gift", "promo", "free", "prize", "support", "invoice", "signin", "mfa",
    "2fa", "banking", "paypal", "apple", "google", "microsoft",
];

/// Derives the fixed feature set from one URL. The lookup tables are built
/// once here and never mutated, so a shared instance needs no locking.
pub struct Featurizer {
    suspicious_tlds: HashSet<&'static str>,
    shorteners: HashSet<&'static str>,
    brand_words: &'static [&'static str],
}

impl Featurizer {
    pub fn new() -> Self {
        Self {
            suspicious_tlds: SUSPICIOUS_TLDS.iter().copied().collect(),
            shorteners: SHORTENERS.iter().copied().collect(),
            brand_words: BRAND_WORDS,
        }
    }

    pub fn extract(&self, raw: &str) -> Result<FeatureRecord, AppError> {
        let parsed = ParsedUrl::parse(raw)?;
        Ok(self.featurize(&parsed))
    }

    fn featurize(&self, u: &ParsedUrl) -> FeatureRecord {
        let tld = u.tld();
        let path_lower = u.path.to_lowercase();

        FeatureRecord {
            url: u.full_href.clone(),
            scheme: u.scheme.clone(),
            uses_http: u.scheme == "http",
            length: u.full_href.chars().count(),
            hostname_length: u.host.chars().count(),
            path_length: u.path.chars().count(),
            num_dots: u.host.matches('.').count(),
            num_hyphens: u.host.matches('-').count(),
            has_at_symbol: u.full_href.contains('@'),
            has_port: u.port.is_some(),
            query_length: u.query.chars().count(),
            fragment_length: u.fragment.chars().count(),
            entropy_host: round2(shannon_entropy(&u.host_no_www)),
            is_ip_address: is_ip_host(&u.host),
            has_punycode: has_punycode(&u.host),
            suspicious_tld: self.suspicious_tlds.contains(tld.as_str()),
            is_shortener: self
                .shorteners
                .contains(u.host_no_www.to_lowercase().as_str()),
            brand_word_in_path: self.brand_words.iter().any(|w| path_lower.contains(w)),
            num_digits_host: u.host.chars().filter(|c| c.is_ascii_digit()).count(),
            num_subdomains: u.host.split('.').count().saturating_sub(2),
        }
    }
}

/// Shannon entropy in bits over the code points of `s`. Empty input is 0
/// by definition.
pub fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in s.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    let len = s.chars().count() as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// Permissive shape check, not RFC validation: four dotted digit groups, or
// a host of only hex digits and colons. Bracketed IPv6 does not match.
fn is_ip_host(host: &str) -> bool {
    let groups: Vec<&str> = host.split('.').collect();
    if groups.len() == 4
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit()))
    {
        return true;
    }
    !host.is_empty() && host.chars().all(|c| c.is_ascii_hexdigit() || c == ':')
}

fn has_punycode(host: &str) -> bool {
    host.starts_with("xn--") || host.contains(".xn--")
}
