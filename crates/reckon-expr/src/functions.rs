//! Built-in math functions

use crate::error::{ExprError, ExprResult};
use std::collections::HashMap;

/// Function implementation signature
pub type FunctionImpl = fn(&[f64]) -> ExprResult<f64>;

/// Function definition
pub struct FunctionDef {
    /// Function name (lowercase, matched exactly)
    pub name: &'static str,
    /// Required argument count
    pub arity: usize,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Function registry
pub struct FunctionRegistry {
    functions: HashMap<&'static str, FunctionDef>,
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };

        registry.register(FunctionDef {
            name: "sqrt",
            arity: 1,
            implementation: fn_sqrt,
        });
        registry.register(FunctionDef {
            name: "round",
            arity: 1,
            implementation: fn_round,
        });
        registry.register(FunctionDef {
            name: "ceil",
            arity: 1,
            implementation: fn_ceil,
        });
        registry.register(FunctionDef {
            name: "floor",
            arity: 1,
            implementation: fn_floor,
        });
        registry.register(FunctionDef {
            name: "sin",
            arity: 1,
            implementation: fn_sin,
        });
        registry.register(FunctionDef {
            name: "cos",
            arity: 1,
            implementation: fn_cos,
        });
        registry.register(FunctionDef {
            name: "tan",
            arity: 1,
            implementation: fn_tan,
        });

        registry
    }

    /// Look up a function by exact name
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Register a function
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name, def);
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// sqrt function; negative operands are a domain error
pub fn fn_sqrt(args: &[f64]) -> ExprResult<f64> {
    let x = args[0];
    if x < 0.0 {
        return Err(ExprError::Domain(format!("sqrt of negative number {x}")));
    }
    Ok(x.sqrt())
}

/// round function (half away from zero)
pub fn fn_round(args: &[f64]) -> ExprResult<f64> {
    Ok(args[0].round())
}

/// ceil function
pub fn fn_ceil(args: &[f64]) -> ExprResult<f64> {
    Ok(args[0].ceil())
}

/// floor function
pub fn fn_floor(args: &[f64]) -> ExprResult<f64> {
    Ok(args[0].floor())
}

/// sin function (radians)
pub fn fn_sin(args: &[f64]) -> ExprResult<f64> {
    Ok(args[0].sin())
}

/// cos function (radians)
pub fn fn_cos(args: &[f64]) -> ExprResult<f64> {
    Ok(args[0].cos())
}

/// tan function (radians)
pub fn fn_tan(args: &[f64]) -> ExprResult<f64> {
    Ok(args[0].tan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_core_vocabulary() {
        let registry = FunctionRegistry::new();
        for name in reckon_core::FUNCTIONS {
            let def = registry.get(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(def.arity, 1);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = FunctionRegistry::new();
        assert!(registry.get("sqrt").is_some());
        assert!(registry.get("SQRT").is_none());
    }

    #[test]
    fn test_sqrt_rejects_negative() {
        assert_eq!(fn_sqrt(&[9.0]).unwrap(), 3.0);
        assert!(matches!(fn_sqrt(&[-1.0]), Err(ExprError::Domain(_))));
    }

    #[test]
    fn test_rounding_functions() {
        assert_eq!(fn_round(&[2.5]).unwrap(), 3.0);
        assert_eq!(fn_ceil(&[2.1]).unwrap(), 3.0);
        assert_eq!(fn_floor(&[2.9]).unwrap(), 2.0);
    }
}
