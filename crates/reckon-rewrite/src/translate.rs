//! Line translation
//!
//! Composes the rewrite passes with assignment and comment handling to turn
//! one raw notebook line into one evaluable statement.

use crate::passes;
use reckon_core::{classify_line, LineKind};
use reckon_units::UnitConverter;

/// A raw line translated for evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// Blank or comment; never reaches the evaluator
    Skip,
    /// An evaluable statement
    Statement {
        /// Translated statement text
        text: String,
        /// Whether the line binds a name for subsequent lines
        is_assignment: bool,
    },
}

/// Translate one raw line.
///
/// Blank and comment lines become [`Translation::Skip`]. Assignment lines
/// split at the first `=`, translate the right-hand side, and keep the
/// trimmed name. Everything else runs through the rewrite passes in fixed
/// order.
pub fn translate_line(line: &str, converter: &dyn UnitConverter) -> Translation {
    match classify_line(line) {
        LineKind::Blank | LineKind::Comment => Translation::Skip,
        LineKind::Assignment => Translation::Statement {
            text: translate_assignment(line, converter),
            is_assignment: true,
        },
        LineKind::Expression => Translation::Statement {
            text: rewrite_expression(line, converter),
            is_assignment: false,
        },
    }
}

fn translate_assignment(line: &str, converter: &dyn UnitConverter) -> String {
    // classify_line only reports Assignment when a '=' is present
    let (name, expression) = line.split_once('=').unwrap_or((line, ""));
    let name = name.trim();
    let expression = expression.trim();

    // A right-hand side containing another '=' translates as its own
    // assignment; the evaluator rejects the nested result as malformed.
    let rhs = if expression.contains('=') {
        translate_assignment(expression, converter)
    } else {
        rewrite_expression(expression, converter)
    };

    format!("{name} = {rhs}")
}

/// Apply the rewrite passes of this crate in their fixed order:
/// unit conversion → magnitude suffixes → percentages → constants → bare
/// function calls
pub fn rewrite_expression(text: &str, converter: &dyn UnitConverter) -> String {
    let text = passes::rewrite_conversions(text, converter);
    let text = passes::rewrite_magnitudes(&text);
    let text = passes::rewrite_percentages(&text);
    let text = passes::rewrite_constants(&text);
    passes::rewrite_functions(&text)
}
