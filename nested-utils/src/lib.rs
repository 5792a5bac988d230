//! Nested-map access and JSON fetching.
//!
//! - **[`nested`]**: Pure traversal of JSON objects along a key path.
//!   No I/O, fully testable in isolation.
//! - **[`fetch`]**: One outbound GET parsed as JSON. The network call sits
//!   behind the [`fetch::Transport`] trait so tests can substitute it.
//!
//! [`config`], [`logging`] and [`exit_codes`] support the `nested-utils` CLI.

pub mod config;
pub mod exit_codes;
pub mod fetch;
pub mod logging;
pub mod nested;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
