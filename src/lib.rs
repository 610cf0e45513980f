//! Keyboard Layout Catalog Library
//!
//! This library provides core functionality for the layoutcat tool,
//! including the packed position codec, canonical layout packing, and
//! building catalog files from directories of layout records.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod packing;
pub mod parser;
pub mod services;
