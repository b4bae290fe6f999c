//! Prelude module - common imports for reckon users
//!
//! ```rust
//! use reckon::prelude::*;
//! ```

pub use crate::{
    // Session types
    evaluate_document,
    Session,

    // Core types
    Preferences,
    ERROR_MARKER,
    KEYWORDS,

    // Error types
    ExprError,
    UnitError,

    // Conversion capability
    StandardConverter,
    UnitConverter,
};
