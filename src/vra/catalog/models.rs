//! Catalog item data models

use serde::{Deserialize, Serialize};

use crate::error::VraError;
use crate::vra::Link;

/// Entitled catalog item view as returned by the consumer API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemView {
    #[serde(default)]
    pub catalog_item_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A catalog item resolved for one submission
///
/// The backend orders links as template first, submission second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    pub id: String,
    pub template_url: String,
    pub submit_url: String,
}

impl TryFrom<CatalogItemView> for CatalogItem {
    type Error = VraError;

    fn try_from(view: CatalogItemView) -> Result<Self, Self::Error> {
        let mut links = view.links.into_iter();
        match (links.next(), links.next()) {
            (Some(template), Some(submit)) => Ok(Self {
                name: view.name,
                id: view.catalog_item_id,
                template_url: template.href,
                submit_url: submit.href,
            }),
            _ => Err(VraError::InvalidResponse(format!(
                "catalog item '{}' does not expose template and submission links",
                view.name
            ))),
        }
    }
}

/// Catalog listing row
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemSummary {
    pub name: String,
    pub id: String,
    pub submit_request_url: String,
    pub submit_request_method: String,
}

impl From<&CatalogItemView> for CatalogItemSummary {
    fn from(view: &CatalogItemView) -> Self {
        let submit = view.links.get(1);
        Self {
            name: view.name.clone(),
            id: view.catalog_item_id.clone(),
            submit_request_url: submit.map(|l| l.href.clone()).unwrap_or_default(),
            submit_request_method: submit.map(|l| l.rel.clone()).unwrap_or_default(),
        }
    }
}
