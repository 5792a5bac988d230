//! Stable exit codes for `nested-utils` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid input, config, network or other errors.
pub const INVALID: i32 = 1;
/// A key along the requested path was missing.
pub const MISSING_KEY: i32 = 2;
