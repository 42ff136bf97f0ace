//! The callable shape the evaluator applies: primitive or user-defined.

use crate::environment::Environment;
use crate::error::LogoResult;
use crate::outcome::Outcome;
use crate::token::Token;
use crate::value::Value;

/// A native primitive's body.
///
/// The environment is always passed through; `needs_env` on [`Procedure`] is
/// kept purely as the descriptive flag spec.md's data model names (a
/// primitive that doesn't need it simply ignores the parameter) rather than
/// as a second, variable-arity calling convention.
pub type NativeFn = fn(args: &[Value], env: &mut Environment) -> LogoResult<Outcome>;

/// Either a native function pointer or an ordered sequence of body lines.
#[derive(Clone)]
pub enum ProcBody {
    Native(NativeFn),
    UserDefined(Vec<Vec<Token>>),
}

/// A named callable, immutable once registered.
#[derive(Clone)]
pub struct Procedure {
    pub name: String,
    pub arg_count: usize,
    pub body: ProcBody,
    pub is_primitive: bool,
    pub needs_env: bool,
    pub formal_params: Vec<String>,
}

impl Procedure {
    /// Builds a primitive descriptor with positional parameter names
    /// `"0"`, `"1"`, ... per spec.md's default for primitives.
    pub fn native(name: &str, arity: usize, needs_env: bool, f: NativeFn) -> Self {
        Self {
            name: name.to_string(),
            arg_count: arity,
            body: ProcBody::Native(f),
            is_primitive: true,
            needs_env,
            formal_params: (0..arity).map(|i| i.to_string()).collect(),
        }
    }

    /// Builds a `to ... end` defined procedure. Always `needs_env = true`
    /// per spec.md §4.7.
    pub fn user_defined(name: &str, formal_params: Vec<String>, lines: Vec<Vec<Token>>) -> Self {
        let arg_count = formal_params.len();
        Self {
            name: name.to_string(),
            arg_count,
            body: ProcBody::UserDefined(lines),
            is_primitive: false,
            needs_env: true,
            formal_params,
        }
    }
}
