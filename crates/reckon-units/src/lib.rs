//! # reckon-units
//!
//! Unit conversion capability for the reckon calculator notebook.
//!
//! This crate provides:
//! - [`UnitConverter`] - the trait the rewrite pipeline converts through
//! - [`StandardConverter`] - the built-in implementation, wired in by default
//! - [`UNIT_ALIASES`] - spelled-out unit names mapped to canonical symbols
//!
//! ## Example
//!
//! ```rust
//! use reckon_units::{StandardConverter, UnitConverter};
//!
//! let converter = StandardConverter;
//! assert_eq!(converter.convert(100.0, "cm", "m").unwrap(), 1.0);
//! assert!(converter.convert(1.0, "cm", "kg").is_err());
//! ```

pub mod alias;
pub mod converter;
pub mod error;

pub use alias::UNIT_ALIASES;
pub use converter::{StandardConverter, UnitConverter};
pub use error::{UnitError, UnitResult};
