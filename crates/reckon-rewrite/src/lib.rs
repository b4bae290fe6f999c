//! # reckon-rewrite
//!
//! Shorthand rewrite passes and line translation for the reckon calculator
//! notebook.
//!
//! Raw notebook lines are human-friendly shorthand (`2k + 1`, `10% of 200`,
//! `100 cm in m`, `sqrt 9`). This crate turns each line into a strictly
//! evaluable statement through a fixed sequence of text-level passes:
//! unit conversion → magnitude suffixes → percentages → constants → bare
//! function calls. The passes never validate overall syntax; malformed input
//! is deferred to the evaluator.
//!
//! ## Example
//!
//! ```rust
//! use reckon_rewrite::{translate_line, Translation};
//! use reckon_units::StandardConverter;
//!
//! match translate_line("2k + 1", &StandardConverter) {
//!     Translation::Statement { text, is_assignment } => {
//!         assert_eq!(text, "2 * 1e3 + 1");
//!         assert!(!is_assignment);
//!     }
//!     Translation::Skip => unreachable!(),
//! }
//! ```

pub mod passes;
pub mod translate;

pub use passes::{
    normalize_unit_aliases, rewrite_constants, rewrite_conversions, rewrite_functions,
    rewrite_magnitudes, rewrite_percentages,
};
pub use translate::{rewrite_expression, translate_line, Translation};
