//! Common types and traits for all aggregates

pub mod catalog_record;

// Re-exports
pub use catalog_record::{saved_record, CatalogRecord};
