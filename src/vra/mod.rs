//! vRA API client module
//!
//! This module provides functionality to interact with the vRealize Automation
//! catalog, request and identity APIs.

pub mod catalog;
mod client;
mod credentials;
pub mod helpers;
mod host;
pub mod identity;
pub mod requests;
pub mod templates;

use serde::{Deserialize, Deserializer};

pub use catalog::{run_catalog_command, CatalogItem, CatalogItemSummary, CatalogItemView};
pub use client::{ClientConfig, VraClient};
pub use credentials::TokenResolver;
pub use host::HostResolver;
pub use identity::{
    run_login_command, run_token_check_command, Credentials, IssuedToken, PasswordResolver,
};
pub use requests::{
    run_requests_find_command, run_requests_list_command, run_status_command,
    run_submit_command, DeploymentOptions, RequestData, RequestEntry, RequestStatus,
    StatusQuery, SubmittedRequest,
};
pub use templates::{apply_overrides, FieldOverride};

/// Paged list wrapper returned by consumer endpoints (shared across resources)
///
/// A `null` page and `null` items are treated as absent.
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ContentResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_tolerant_list")]
    pub content: Vec<T>,
}

/// Deserialize a list where the list itself or any item may be `null`
pub(crate) fn null_tolerant_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

/// Hypermedia link attached to catalog resources
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    #[serde(default)]
    pub rel: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_response_missing_content() {
        let response: ContentResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"metadata": {"size": 20}})).unwrap();
        assert!(response.content.is_empty());
    }

    #[test]
    fn test_content_response_null_content() {
        let response: ContentResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"content": null})).unwrap();
        assert!(response.content.is_empty());
    }

    #[test]
    fn test_content_response_skips_null_items() {
        let response: ContentResponse<Link> = serde_json::from_value(serde_json::json!({
            "content": [null, {"href": "https://vra/a"}, null]
        }))
        .unwrap();
        assert_eq!(response.content.len(), 1);
        assert_eq!(response.content[0].href, "https://vra/a");
    }

    #[test]
    fn test_link_without_rel() {
        let link: Link =
            serde_json::from_value(serde_json::json!({"href": "https://vra/x"})).unwrap();
        assert_eq!(link.href, "https://vra/x");
        assert!(link.rel.is_empty());
    }
}
