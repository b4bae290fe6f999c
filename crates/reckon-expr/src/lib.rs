//! # reckon-expr
//!
//! Expression parser and evaluator for the reckon calculator notebook.
//!
//! This crate provides:
//! - Program parsing (text → AST): newline-separated statements, each an
//!   assignment (`a = 1 + 2`) or a bare expression
//! - Program evaluation (AST → f64) against an explicit variable environment
//! - The seven built-in math functions
//!
//! There is no dynamic code execution anywhere: translated notebook lines
//! are tokenized, parsed and interpreted, and failures carry a distinct
//! [`ExprError`] kind instead of one opaque marker.
//!
//! ## Example
//!
//! ```rust
//! use reckon_expr::evaluate_program;
//!
//! let value = evaluate_program("a = 20\na * 2").unwrap();
//! assert_eq!(value, 40.0);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use ast::{BinaryOperator, Expr, Program, Statement, UnaryOperator};
pub use error::{ExprError, ExprResult};
pub use evaluator::{evaluate_program, evaluate_with_env, Environment};
pub use parser::{parse_program, parse_statement};
