use crate::models::{DecodedDataset, Rankings};

/// Top `n` of each ranking. `n` is bounded by the cap applied at decode time.
pub fn top_rankings(dataset: &DecodedDataset, n: usize) -> Rankings {
    Rankings {
        top_by_bounty: dataset.rankings.top_by_bounty.iter().take(n).cloned().collect(),
        top_by_upvotes: dataset.rankings.top_by_upvotes.iter().take(n).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{decode_store, DecodeOptions};
    use serde_json::{json, Value};

    fn dataset(rows: usize) -> DecodedDataset {
        let ranked: Vec<Value> = (0..rows)
            .map(|i| json!([0, format!("r{}", i), i.to_string(), i * 3, i * 100, 0]))
            .collect();
        let bytes = serde_json::to_vec(&json!({
            "programs": ["Acme"],
            "vulnTypes": ["XSS"],
            "rankings": {"bounty": ranked.clone(), "upvotes": ranked}
        }))
        .unwrap();
        decode_store(&bytes, &DecodeOptions::default()).unwrap()
    }

    #[test]
    fn test_truncates_to_requested_count() {
        let top = top_rankings(&dataset(30), 10);
        assert_eq!(top.top_by_bounty.len(), 10);
        assert_eq!(top.top_by_upvotes.len(), 10);
        assert_eq!(top.top_by_bounty[0].bounty, 2900.0);
        assert_eq!(top.top_by_upvotes[0].upvotes, 87);
    }

    #[test]
    fn test_request_beyond_cap_is_bounded() {
        let top = top_rankings(&dataset(30), 100);
        assert_eq!(top.top_by_bounty.len(), 20);
    }

    #[test]
    fn test_order_is_non_increasing() {
        let top = top_rankings(&dataset(30), 20);
        assert!(top.top_by_bounty.windows(2).all(|w| w[0].bounty >= w[1].bounty));
        assert!(top.top_by_upvotes.windows(2).all(|w| w[0].upvotes >= w[1].upvotes));
    }

    #[test]
    fn test_fewer_rows_than_requested() {
        let top = top_rankings(&dataset(3), 10);
        assert_eq!(top.top_by_bounty.len(), 3);
    }
}
