use serde::{Deserialize, Serialize, Serializer};

/// A single disclosed vulnerability report, fully decoded from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Bug bounty program the report was submitted to.
    pub program: String,
    pub title: String,
    /// Public URL of the report (link prefix + report identifier).
    pub link: String,
    pub upvotes: u64,
    /// Bounty paid out, in USD.
    #[serde(serialize_with = "serialize_amount")]
    pub bounty: f64,
    /// Vulnerability class, e.g. "XSS" or "SSRF".
    pub vuln_type: String,
}

/// Write whole-dollar amounts as JSON integers so `500` stays `500` rather than `500.0`.
pub fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && *amount >= 0.0 && *amount < u64::MAX as f64 {
        serializer.serialize_u64(*amount as u64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(bounty: f64) -> Report {
        Report {
            program: "Acme".to_string(),
            title: "Sample bug".to_string(),
            link: "https://hackerone.com/reports/123".to_string(),
            upvotes: 10,
            bounty,
            vuln_type: "XSS".to_string(),
        }
    }

    #[test]
    fn test_whole_bounty_serializes_as_integer() {
        let value = serde_json::to_value(report(500.0)).unwrap();
        assert_eq!(value["bounty"], json!(500));
        assert_eq!(value["upvotes"], json!(10));
    }

    #[test]
    fn test_fractional_bounty_keeps_cents() {
        let value = serde_json::to_value(report(150.5)).unwrap();
        assert_eq!(value["bounty"], json!(150.5));
    }

    #[test]
    fn test_amount_beyond_u64_stays_float() {
        // u64::MAX as f64 rounds up to 2^64, which does not fit in a u64.
        let amount = 2f64.powi(64);
        let value = serde_json::to_value(report(amount)).unwrap();
        assert!(value["bounty"].is_f64());
        assert_eq!(value["bounty"].as_f64(), Some(amount));
    }
}
