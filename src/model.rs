use serde::{Deserialize, Serialize};

/// A product record in the catalog
///
/// The `id` is server-assigned on creation and immutable thereafter. Wire
/// field names are camelCase (`inStock`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Candidate product payload for create and update requests
///
/// Carries no `id`: identifiers are assigned by the store on create and
/// addressed by path on update. Only materialized after the payload has
/// passed [`crate::validate::validate_product`], so field types are already
/// known to match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Free-form, no validation constraint; empty when omitted.
    #[serde(default)]
    pub category: String,
    pub in_stock: bool,
}
