//! The packed catalog format: position codec and canonical layout packing.

pub mod layout;
pub mod position;

// Re-export the operations and their error types
pub use layout::{pack, unpack, PackError, UnpackError};
pub use position::{decode, encode, TokenError};
