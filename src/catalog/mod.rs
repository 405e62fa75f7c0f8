//! Catalog - static lists of bookable travel items (hotels, spots).
//!
//! A catalog is an ordered `Vec<CatalogItem>` loaded once per session and
//! treated as immutable. Items flagged `is_plan` seed the initial selection
//! on list pages.

pub mod mock;

use serde::{Deserialize, Serialize};

/// One bookable entry in a catalog.
///
/// Serializes with camelCase field names (`isPlan`) to stay compatible with
/// the JSON the booking frontend persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within one catalog.
    pub id: u32,
    /// Display name; target of the search filter.
    pub name: String,
    pub location: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    /// Navigation path for the item's detail page.
    pub path: String,
    /// Whether the item belongs to the initial recommended plan.
    #[serde(default)]
    pub is_plan: bool,
}

impl CatalogItem {
    /// Build an item with the common fields; `image` defaults to empty and
    /// `is_plan` to false.
    pub fn new(id: u32, name: &str, location: &str, price: f64, rating: f64, path: &str) -> Self {
        CatalogItem {
            id,
            name: name.to_string(),
            location: location.to_string(),
            price,
            rating,
            image: String::new(),
            path: path.to_string(),
            is_plan: false,
        }
    }

    /// Mark the item as part of the initial plan.
    pub fn planned(mut self) -> Self {
        self.is_plan = true;
        self
    }
}
