//! Application-wide constants.

/// Binary name used in help text and error messages
pub const APP_BINARY_NAME: &str = "layoutcat";

/// Width of one packed position token, in hex characters
pub const TOKEN_WIDTH: usize = 3;

/// Default width of a key label in the catalog wire format
pub const LABEL_WIDTH: usize = 1;
