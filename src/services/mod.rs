//! Batch services built on top of the packing core.

pub mod catalog;

pub use catalog::{BuildReport, CatalogService, SkippedLayout};
