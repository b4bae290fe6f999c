//! # reckon
//!
//! A line-oriented calculator notebook. Each line of a document is a
//! comment, a variable assignment, or an arithmetic expression in
//! human-friendly shorthand:
//!
//! ```text
//! # travel budget
//! nights = 4
//! hotel = 120k
//! 10% off hotel * nights
//! 100 cm in m
//! sqrt 9
//! ```
//!
//! Evaluation runs strictly top to bottom and yields one formatted result
//! (or an error marker) per line, with variables from earlier lines visible
//! to later ones.
//!
//! ## Example
//!
//! ```rust
//! use reckon::prelude::*;
//!
//! let results = evaluate_document("1 + 2\na = 20\na * 2", &Preferences::default());
//! assert_eq!(results, vec!["3", "20", "40"]);
//! ```
//!
//! The heavy lifting lives in the member crates: `reckon-rewrite` turns
//! shorthand into strict statements, `reckon-expr` parses and interprets
//! them, `reckon-units` supplies the conversion capability, and this crate
//! drives the per-line session loop.

pub mod prelude;
pub mod session;

pub use session::{evaluate_document, Session};

// Re-export core types
pub use reckon_core::{
    classify_line, format_number, LineKind, Preferences, ERROR_MARKER, FUNCTIONS, KEYWORDS,
};

// Re-export the expression language
pub use reckon_expr::{
    evaluate_program, evaluate_with_env, parse_program, parse_statement, Environment, ExprError,
    ExprResult, Program, Statement,
};

// Re-export the rewrite pipeline
pub use reckon_rewrite::{rewrite_expression, translate_line, Translation};

// Re-export the unit conversion capability
pub use reckon_units::{StandardConverter, UnitConverter, UnitError, UnitResult, UNIT_ALIASES};
