//! Paginated list envelope returned by Blip's list endpoints.

use serde::Deserialize;
use serde_json::Value;

/// A paginated Blip response.
///
/// Blip's list endpoints (`/endusers`, `/transactions`, `/bills`) wrap their
/// results in an object whose `items` key holds one page of records. The
/// records themselves are opaque to this service, so they stay as raw JSON.
///
/// Note that because the remote response is paginated, `items` may not hold
/// every record that exists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    /// One page of records, in the order the remote returned them
    #[serde(default)]
    pub items: Vec<Value>,
}

impl Page {
    /// Collect the string value under `key` from every item that has one.
    ///
    /// Used to pull `oid` values off transactions and `id` values off bills
    /// before issuing per-record delete calls. Items without the key (or
    /// with a non-string value) are skipped.
    pub fn string_field(&self, key: &str) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.get(key).and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_field_preserves_order_and_skips_missing() {
        let page: Page = serde_json::from_value(json!({
            "items": [
                {"oid": "a"},
                {"name": "no oid"},
                {"oid": "b"},
                {"oid": 42},
                {"oid": "c"}
            ],
            "total": 5
        }))
        .unwrap();

        assert_eq!(page.string_field("oid"), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_items_key_parses_to_empty_page() {
        let page: Page = serde_json::from_value(json!({"total": 0})).unwrap();
        assert!(page.items.is_empty());
    }
}
