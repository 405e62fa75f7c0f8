mod catalog;
mod selection;
mod store;

#[cfg(feature = "http")]
pub mod service;

pub use catalog::{mock, CatalogItem};
pub use selection::{partition, Partition, SelectionSet};
pub use store::{FileRecordStore, InMemoryRecordStore, RecordStore, StoreError, StoreStatus};
