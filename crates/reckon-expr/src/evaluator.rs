//! Program evaluator
//!
//! Evaluates parsed programs to produce a single numeric value. Every
//! successful evaluation returns a finite f64; division by zero, domain
//! errors and overflow all surface as distinct [`ExprError`] kinds.

use crate::ast::{BinaryOperator, Expr, Program, Statement, UnaryOperator};
use crate::error::{ExprError, ExprResult};
use crate::functions::FunctionRegistry;
use crate::parser::parse_program;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

fn get_function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Variable environment: name → value
pub type Environment = HashMap<String, f64>;

/// Parse and evaluate `source` against a fresh empty environment.
///
/// The source is newline-separated statements; the program's value is the
/// value of its last statement.
///
/// # Example
/// ```rust
/// use reckon_expr::evaluate_program;
///
/// assert_eq!(evaluate_program("1 + 2").unwrap(), 3.0);
/// assert_eq!(evaluate_program("a = 6\na * 7").unwrap(), 42.0);
/// ```
pub fn evaluate_program(source: &str) -> ExprResult<f64> {
    let program = parse_program(source)?;
    let mut env = Environment::new();
    evaluate_with_env(&program, &mut env)
}

/// Evaluate a parsed program against a caller-supplied environment.
///
/// Assignments declare or rebind names in `env` as they are reached; a
/// statement that fails leaves the earlier bindings in place.
pub fn evaluate_with_env(program: &Program, env: &mut Environment) -> ExprResult<f64> {
    let mut last = None;

    for statement in &program.statements {
        last = Some(match statement {
            Statement::Assign { name, value } => {
                let value = evaluate_expr(value, env)?;
                // Rebinding an existing name is allowed; later wins
                env.insert(name.clone(), value);
                value
            }
            Statement::Expr(expr) => evaluate_expr(expr, env)?,
        });
    }

    match last {
        Some(value) => finite(value),
        None => Err(ExprError::Parse("Empty program".into())),
    }
}

fn evaluate_expr(expr: &Expr, env: &Environment) -> ExprResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),

        Expr::Variable(name) => env
            .get(name)
            .copied()
            .ok_or_else(|| ExprError::UnknownVariable(name.clone())),

        Expr::UnaryOp {
            op: UnaryOperator::Negate,
            operand,
        } => Ok(-evaluate_expr(operand, env)?),

        Expr::BinaryOp { op, left, right } => {
            let left = evaluate_expr(left, env)?;
            let right = evaluate_expr(right, env)?;
            apply_binary(*op, left, right)
        }

        Expr::Function { name, args } => {
            let def = get_function_registry()
                .get(name)
                .ok_or_else(|| ExprError::UnknownFunction(name.clone()))?;

            if args.len() != def.arity {
                return Err(ExprError::ArgumentCount {
                    function: name.clone(),
                    expected: def.arity,
                    actual: args.len(),
                });
            }

            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(evaluate_expr(arg, env)?);
            }

            finite((def.implementation)(&values)?)
        }
    }
}

fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> ExprResult<f64> {
    let value = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Subtract => left - right,
        BinaryOperator::Multiply => left * right,
        BinaryOperator::Divide => {
            if right == 0.0 {
                return Err(ExprError::DivisionByZero);
            }
            left / right
        }
        BinaryOperator::Power => {
            let value = left.powf(right);
            // powf yields NaN for a fractional power of a negative base
            if value.is_nan() {
                return Err(ExprError::Domain(format!("{left} raised to {right}")));
            }
            value
        }
    };

    finite(value)
}

fn finite(value: f64) -> ExprResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else if value.is_nan() {
        Err(ExprError::Domain("result is not a number".into()))
    } else {
        Err(ExprError::Overflow)
    }
}
