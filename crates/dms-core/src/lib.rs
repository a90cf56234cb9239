//! Shared building blocks for the Daitch-Mokotoff Soundex crates.
//!
//! - [`character`] -- character classification used by cleanup and rule matching
//! - [`code`] -- fixed-length code constants and helpers for joined code sets

pub mod character;
pub mod code;
