//! Built-in sample catalogs for the hotel and spot list pages.
//!
//! Mirrors the mock data the booking UI ships with: one `is_plan` entry per
//! catalog seeds the "recommended plan" pane, the rest land in the
//! searchable "recommended" pane.

use super::CatalogItem;

/// Sample hotel catalog.
pub fn hotels() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1, "Hyatt Regency", "SLEMAN, DIY", 125.0, 4.5, "/attractions/hyatt-regency").planned(),
        CatalogItem::new(2, "Hyattyy Regency", "SLEMAN, DIY", 125.0, 4.5, "/attractions/hyatt-regency-2"),
        CatalogItem::new(3, "Argo Hotel", "PARANGTRITIS", 125.0, 4.5, "/attractions/argo-hotel"),
        CatalogItem::new(4, "Astor Hotel", "PARANGTRITIS", 125.0, 4.5, "/attractions/astor-hotel-1"),
        CatalogItem::new(5, "Astor Hotel", "PARANGTRITIS", 125.0, 4.5, "/attractions/astor-hotel-2"),
    ]
}

/// Sample scenic-spot catalog.
pub fn spots() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1, "Palace Museum", "Beijing", 60.0, 4.8, "/attractions/gugong").planned(),
        CatalogItem::new(2, "Summer Palace", "Beijing", 30.0, 4.7, "/attractions/yiheyuan"),
        CatalogItem::new(3, "Badaling Great Wall", "Beijing", 40.0, 4.9, "/attractions/badaling"),
        CatalogItem::new(4, "Temple of Heaven Park", "Beijing", 15.0, 4.6, "/attractions/tiantan"),
    ]
}
