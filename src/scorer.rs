use crate::types::{FeatureRecord, Reason, RiskLabel, ScoreResult};

/// Applies the weighted rule sequence to one feature record. Rules run in
/// declaration order; that order is the tie-break for equal weights after
/// the final stable sort.
pub fn score(f: &FeatureRecord) -> ScoreResult {
    let mut total: u32 = 0;
    let mut reasons: Vec<Reason> = Vec::new();
    let mut add = |weight: u32, reason: String| {
        total += weight;
        reasons.push(Reason { weight, reason });
    };

    if f.uses_http {
        add(15, "Uses unsecured HTTP".to_string());
    }
    if f.is_ip_address {
        add(20, "Hostname is an IP address".to_string());
    }
    if f.has_punycode {
        add(15, "Punycode hostname (xn--)".to_string());
    }
    if f.suspicious_tld {
        add(15, format!("Suspicious TLD .{}", trailing_label(&f.url)));
    }
    if f.is_shortener {
        add(15, "Known URL shortener".to_string());
    }
    if f.has_at_symbol {
        add(12, "Contains @ symbol".to_string());
    }
    if f.has_port {
        add(10, "Non-standard port in URL".to_string());
    }
    if f.brand_word_in_path {
        add(15, "Impersonation/credential bait keyword".to_string());
    }

    if f.length > 80 {
        add(10, "Very long URL".to_string());
    }
    if f.hostname_length > 25 {
        add(10, "Long hostname".to_string());
    }
    if f.num_dots >= 3 {
        add(10, "Many subdomains".to_string());
    }
    if f.num_hyphens >= 2 {
        add(8, "Multiple hyphens".to_string());
    }
    if f.num_digits_host >= 3 {
        add(6, "Many digits in hostname".to_string());
    }
    if f.entropy_host > 3.4 {
        add(8, "High hostname entropy".to_string());
    }
    if f.query_length > 30 {
        add(6, "Long query string".to_string());
    }

    // Stable sort: equal weights keep rule order.
    reasons.sort_by(|a, b| b.weight.cmp(&a.weight));

    let score = total.clamp(0, 100);
    ScoreResult {
        score,
        label: classify(score),
        reasons,
    }
}

pub fn classify(score: u32) -> RiskLabel {
    match score {
        0..=29 => RiskLabel::Low,
        30..=54 => RiskLabel::Medium,
        _ => RiskLabel::High,
    }
}

// The displayed TLD comes from the href tail, not the parsed tld: last
// dot-segment of the href, cut at the first slash. A dotted path segment
// can shift it, which is kept as-is.
fn trailing_label(href: &str) -> &str {
    let tail = href.rsplit('.').next().unwrap_or(href);
    tail.split('/').next().unwrap_or(tail)
}
