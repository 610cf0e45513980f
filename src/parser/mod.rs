//! Parsing for layout input files.

pub mod layout;

// Re-export commonly used functions
pub use layout::{parse_layout_file, parse_layout_str};
