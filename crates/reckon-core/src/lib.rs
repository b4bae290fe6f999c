//! # reckon-core
//!
//! Core types for the reckon calculator notebook:
//! - [`Preferences`] - output formatting settings supplied by the host
//! - [`LineKind`] and [`classify_line`] - raw line classification
//! - [`format_number`] - locale-independent number rendering
//! - The keyword vocabulary exposed to editors for highlighting
//!
//! ## Example
//!
//! ```rust
//! use reckon_core::{classify_line, format_number, LineKind, Preferences};
//!
//! assert_eq!(classify_line("a = 20"), LineKind::Assignment);
//! assert_eq!(format_number(1234.5, &Preferences::default()), "1,234.50");
//! ```

pub mod format;
pub mod line;
pub mod preferences;

// Re-exports for convenience
pub use format::format_number;
pub use line::{classify_line, LineKind};
pub use preferences::Preferences;

/// Math functions understood by the notebook, in rewrite-pass order
pub const FUNCTIONS: [&str; 7] = ["sqrt", "round", "ceil", "floor", "sin", "cos", "tan"];

/// Keyword vocabulary exposed read-only to editors for syntax highlighting
pub const KEYWORDS: [&str; 11] = [
    "PI", "E", "in", "to", "sqrt", "round", "ceil", "floor", "sin", "cos", "tan",
];

/// Marker emitted for a line that failed to evaluate
pub const ERROR_MARKER: &str = "-";
