//! Envelope types shared by every endpoint: pagination metadata and error bodies.

use serde::{Deserialize, Deserializer, Serialize};

/// `meta` object attached to list responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Meta {
    /// Pagination details. Required by the page aggregator.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Position of a page within a paginated listing.
///
/// `next_page` is `None` on the last page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    #[serde(default)]
    pub previous_page: Option<i64>,
    #[serde(default)]
    pub next_page: Option<i64>,
    #[serde(default)]
    pub last_page: Option<i64>,
    /// Total number of entries, kept verbatim whether the API sent a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub total_entries: String,
}

impl Pagination {
    /// Whether this is the final page of the listing.
    pub fn is_last_page(&self) -> bool {
        self.next_page.is_none()
    }
}

/// Implemented by every list envelope so the page aggregator can reach `meta`
/// regardless of the resource key the items live under.
pub trait SearchResponse {
    fn meta(&self) -> Option<&Meta>;
}

/// Error object returned by the API on failed requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    /// Machine-readable error code, e.g. `not_found`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// Wire wrapper around [`ErrorDetail`]: `{ "error": { ... } }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_entries_accepts_string_and_number() {
        let from_number: Pagination = serde_json::from_str(
            r#"{"page":1,"per_page":25,"previous_page":null,"next_page":2,"last_page":4,"total_entries":100}"#,
        )
        .unwrap();
        assert_eq!(from_number.total_entries, "100");
        assert!(!from_number.is_last_page());

        let from_string: Pagination = serde_json::from_str(
            r#"{"page":1,"per_page":25,"next_page":null,"total_entries":"0"}"#,
        )
        .unwrap();
        assert_eq!(from_string.total_entries, "0");
        assert!(from_string.is_last_page());
        assert_eq!(from_string.previous_page, None);
        assert_eq!(from_string.last_page, None);
    }

    #[test]
    fn meta_without_pagination() {
        let meta: Meta = serde_json::from_str("{}").unwrap();
        assert!(meta.pagination.is_none());

        let meta: Meta = serde_json::from_str(r#"{"pagination":null}"#).unwrap();
        assert!(meta.pagination.is_none());
    }

    #[test]
    fn error_body_shape() {
        let resp: ErrorResponse = serde_json::from_str(
            r#"{"error":{"code":"not_found","message":"network with ID '11' not found","details":{}}}"#,
        )
        .unwrap();
        assert_eq!(resp.error.code, "not_found");
        assert_eq!(resp.error.message, "network with ID '11' not found");
    }
}
