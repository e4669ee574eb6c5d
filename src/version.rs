//! Toolchain version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The `gidl` version string (for example, `0.1.0`).
pub const GIDL_VERSION: &str = env!("CARGO_PKG_VERSION");
