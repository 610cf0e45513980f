//! Data model types shared across the crate.

pub mod finger;
pub mod layout;
pub mod position;

pub use finger::{Finger, FingerTable};
pub use layout::{Catalog, CatalogEntry, LayoutRecord};
pub use position::{KeyEntry, KeyPosition};
