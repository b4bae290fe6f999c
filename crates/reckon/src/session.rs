//! Sequential notebook evaluation
//!
//! Receives
//! ```text
//! 1 + 2
//! a = 20
//! a * 2
//! ```
//! and produces `["3", "20", "40"]`.
//!
//! Lines are processed strictly top to bottom. Successful assignment
//! statements accumulate in a prefix that is replayed before every later
//! line, so each line sees exactly the bindings the lines above it
//! established. The prefix is rebuilt from nothing on every [`Session::run`]
//! call; no state survives between calls.

use reckon_core::{format_number, Preferences, ERROR_MARKER};
use reckon_expr::evaluate_program;
use reckon_rewrite::{translate_line, Translation};
use reckon_units::{StandardConverter, UnitConverter};

/// Evaluates whole notebook documents.
///
/// # Example
/// ```rust
/// use reckon::{Preferences, Session};
///
/// let session = Session::new(Preferences::default());
/// let results = session.run("a = 20\na * 2");
/// assert_eq!(results, vec!["20", "40"]);
/// ```
pub struct Session<'a> {
    preferences: Preferences,
    converter: &'a dyn UnitConverter,
}

impl<'a> Session<'a> {
    /// Create a session backed by the built-in unit converter
    pub fn new(preferences: Preferences) -> Session<'static> {
        Session {
            preferences,
            converter: &StandardConverter,
        }
    }

    /// Create a session with an injected unit converter
    pub fn with_converter(preferences: Preferences, converter: &'a dyn UnitConverter) -> Self {
        Session {
            preferences,
            converter,
        }
    }

    /// Evaluate a whole document, producing exactly one result per line.
    ///
    /// Each result is a formatted number, `""` for a blank or comment line,
    /// or `"-"` for a line that failed to evaluate. A failure is local to
    /// its line: it neither stops the run nor disturbs the bindings other
    /// lines see.
    pub fn run(&self, text: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut prefix = String::new();

        for (index, line) in text.split('\n').enumerate() {
            match translate_line(line, self.converter) {
                Translation::Skip => results.push(String::new()),
                Translation::Statement {
                    text: statement,
                    is_assignment,
                } => match evaluate_program(&format!("{prefix}{statement}")) {
                    Ok(value) => {
                        results.push(format_number(value, &self.preferences));
                        // only accepted assignments become visible below
                        if is_assignment {
                            prefix.push_str(&statement);
                            prefix.push('\n');
                        }
                    }
                    Err(err) => {
                        log::debug!("line {}: {err}", index + 1);
                        results.push(ERROR_MARKER.to_string());
                    }
                },
            }
        }

        results
    }
}

/// Evaluate `text` with the built-in unit converter.
///
/// Convenience wrapper over [`Session`] for hosts without a custom
/// conversion capability.
pub fn evaluate_document(text: &str, preferences: &Preferences) -> Vec<String> {
    Session::new(preferences.clone()).run(text)
}
