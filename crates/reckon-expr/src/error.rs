//! Expression error types

use thiserror::Error;

/// Result type for expression operations
pub type ExprResult<T> = std::result::Result<T, ExprError>;

/// Errors that can occur while parsing or evaluating a program.
///
/// The session runner collapses all of these to one opaque marker per line;
/// the distinct kinds stay visible to library callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Malformed source text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Identifier with no binding in the environment
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Call to a function the registry does not know
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments in a function call
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Operand outside a function's or operator's domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Result too large for a finite f64
    #[error("Numeric overflow")]
    Overflow,
}
