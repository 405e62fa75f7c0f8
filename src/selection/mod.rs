//! SelectionSet - which catalog items are currently "in the plan".
//!
//! The set is a value type: `toggle` returns a new set instead of mutating
//! in place, so each page/session owns its own state and derived views are
//! recomputed on demand rather than kept in sync by hand.
//!
//! ## Example
//!
//! ```
//! use tripkit::{mock, partition, SelectionSet};
//!
//! let catalog = mock::hotels();
//! let selection = SelectionSet::from_catalog(&catalog);
//! let views = partition(&catalog, &selection, "argo");
//! assert_eq!(views.selected.len(), 1);
//! assert_eq!(views.available[0].name, "Argo Hotel");
//! ```

use std::collections::HashSet;

use crate::catalog::CatalogItem;

/// Set of catalog-item ids marked as part of the user's plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<u32>,
}

impl SelectionSet {
    /// Empty selection.
    pub fn new() -> Self {
        SelectionSet::default()
    }

    /// Seed the selection from a catalog: every item flagged `is_plan` is in.
    pub fn from_catalog(catalog: &[CatalogItem]) -> Self {
        SelectionSet {
            ids: catalog.iter().filter(|item| item.is_plan).map(|item| item.id).collect(),
        }
    }

    /// Flip membership for `id`: remove it if present, insert it otherwise.
    ///
    /// Returns a new set. Ids outside the catalog are accepted; membership
    /// is deliberately decoupled from catalog validity.
    #[must_use]
    pub fn toggle(&self, id: u32) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        SelectionSet { ids }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the selected ids (unordered).
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u32> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        SelectionSet {
            ids: iter.into_iter().collect(),
        }
    }
}

/// The two disjoint panes of a list page: plan items and search candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    /// Items in the selection, in catalog order.
    pub selected: Vec<&'a CatalogItem>,
    /// Items outside the selection whose name matches the query, in catalog order.
    pub available: Vec<&'a CatalogItem>,
}

/// Split a catalog into `selected` and `available` views.
///
/// Both views preserve catalog order; no re-sorting by rating or price.
/// The query is a case-insensitive substring match against the item name;
/// an empty query matches everything. Selected items bypass the query, so
/// `selected` and `available` are always disjoint and together with the
/// query-excluded remainder cover the catalog exactly.
pub fn partition<'a>(
    catalog: &'a [CatalogItem],
    selection: &SelectionSet,
    query: &str,
) -> Partition<'a> {
    let needle = query.to_lowercase();

    let selected = catalog
        .iter()
        .filter(|item| selection.contains(item.id))
        .collect();

    let available = catalog
        .iter()
        .filter(|item| !selection.contains(item.id) && matches_query(&item.name, &needle))
        .collect();

    Partition { selected, available }
}

/// `needle` must already be lowercased; empty matches all.
fn matches_query(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}
