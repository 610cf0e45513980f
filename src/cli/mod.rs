//! CLI command handlers for layoutcat.
//!
//! This module provides headless, scriptable access to the packing core
//! for automation, testing, and CI integration.

pub mod common;
pub mod inspect;
pub mod pack;
pub mod unpack;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use inspect::InspectArgs;
pub use pack::PackArgs;
pub use unpack::UnpackArgs;
