use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "Low risk")]
    Low,
    #[serde(rename = "Medium risk")]
    Medium,
    #[serde(rename = "HIGH risk")]
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low risk",
            RiskLabel::Medium => "Medium risk",
            RiskLabel::High => "HIGH risk",
        }
    }
}

/// One lexical/structural signal set derived from a single parsed URL.
/// Field order matches the serialized key order consumers see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub url: String,
    pub scheme: String,
    #[serde(rename = "usesHTTP")]
    pub uses_http: bool,
    pub length: usize,
    pub hostname_length: usize,
    pub path_length: usize,
    pub num_dots: usize,
    pub num_hyphens: usize,
    pub has_at_symbol: bool,
    pub has_port: bool,
    pub query_length: usize,
    pub fragment_length: usize,
    pub entropy_host: f64,
    #[serde(rename = "isIPAddress")]
    pub is_ip_address: bool,
    pub has_punycode: bool,
    #[serde(rename = "suspiciousTLD")]
    pub suspicious_tld: bool,
    pub is_shortener: bool,
    pub brand_word_in_path: bool,
    pub num_digits_host: usize,
    pub num_subdomains: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub weight: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub label: RiskLabel,
    pub reasons: Vec<Reason>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub label: RiskLabel,
    pub reasons: Vec<Reason>,
    pub features: FeatureRecord,
}

impl ScoreResponse {
    pub fn new(features: FeatureRecord, result: ScoreResult) -> Self {
        Self {
            score: result.score,
            label: result.label,
            reasons: result.reasons,
            features,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_render_their_display_strings() {
        assert_eq!(RiskLabel::Low.as_str(), "Low risk");
        assert_eq!(RiskLabel::Medium.as_str(), "Medium risk");
        assert_eq!(RiskLabel::High.as_str(), "HIGH risk");
        assert_eq!(
            serde_json::to_string(&RiskLabel::High).unwrap(),
            "\"HIGH risk\""
        );
    }

    #[test]
    fn feature_record_keeps_acronym_wire_keys() {
        let record = FeatureRecord {
            url: "https://example.com/".to_string(),
            scheme: "https".to_string(),
            uses_http: false,
            length: 20,
            hostname_length: 11,
            path_length: 1,
            num_dots: 1,
            num_hyphens: 0,
            has_at_symbol: false,
            has_port: false,
            query_length: 0,
            fragment_length: 0,
            entropy_host: 3.1,
            is_ip_address: false,
            has_punycode: false,
            suspicious_tld: false,
            is_shortener: false,
            brand_word_in_path: false,
            num_digits_host: 0,
            num_subdomains: 0,
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["usesHTTP", "isIPAddress", "suspiciousTLD", "hostnameLength", "brandWordInPath"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(!obj.contains_key("usesHttp"));
    }
}
