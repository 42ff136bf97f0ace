//! The recursive expression evaluator, argument collector, and procedure
//! applier.

use std::rc::Rc;

use ahash::AHashMap;

use crate::cursor::TokenCursor;
use crate::definition;
use crate::environment::Environment;
use crate::error::{LogoError, LogoResult};
use crate::outcome::Outcome;
use crate::procedure::{ProcBody, Procedure};
use crate::source::{LineSource, NoSource};
use crate::token::Token;
use crate::value::Value;

/// Consumes exactly the tokens forming one complete expression starting at
/// the cursor's current position and returns its value.
///
/// Dispatch is on the first popped token, per spec.md §4.6. `source` is only
/// ever read from the `to` branch, to pull a definition's continuation
/// lines; every other branch ignores it.
pub fn eval_expression(
    cursor: &mut TokenCursor,
    env: &mut Environment,
    source: &mut dyn LineSource,
) -> LogoResult<Outcome> {
    let tok = cursor
        .pop()
        .ok_or_else(|| LogoError::Syntax(format!("Expected an expression at {cursor}")))?;

    match tok {
        Token::Number(n) => Ok(Outcome::Value(Value::Number(n))),
        Token::Word(ref w) if w == "True" || w == "False" => {
            Ok(Outcome::Value(Value::Word(w.clone())))
        }
        Token::VarRef(name) => Ok(Outcome::Value(env.lookup_variable(&name)?)),
        Token::QuotedWord(name) => Ok(Outcome::Value(Value::Word(name))),
        Token::List(inner) => Ok(Outcome::Value(Value::List(
            inner.iter().map(Value::from_token_data).collect(),
        ))),
        Token::OpenParen => {
            let inner = eval_expression(cursor, env, source)?;
            match cursor.pop() {
                Some(Token::CloseParen) => Ok(inner),
                _ => Err(LogoError::Syntax(format!("Expected ')' at {cursor}"))),
            }
        }
        Token::CloseParen => Err(LogoError::Syntax(format!("Unexpected ')' at {cursor}"))),
        Token::InfixOp(op) => Err(LogoError::Syntax(format!(
            "Unexpected operator '{}' at {cursor}",
            op.symbol()
        ))),
        Token::Word(ref w) if w == "to" => {
            definition::read_definition(cursor, env, source)?;
            Ok(Outcome::NoValue)
        }
        Token::Word(name) => {
            let proc = env.lookup_procedure(&name)?;
            apply_procedure(&proc, cursor, env, source)
        }
    }
}

/// Repeatedly evaluates expressions on `cursor` until either it runs dry
/// (returns no-value) or one yields a non-no-value result, which is
/// returned immediately, leaving any remaining tokens un-evaluated.
pub fn eval_line(
    cursor: &mut TokenCursor,
    env: &mut Environment,
    source: &mut dyn LineSource,
) -> LogoResult<Outcome> {
    loop {
        if cursor.is_empty() {
            return Ok(Outcome::NoValue);
        }
        match eval_expression(cursor, env, source)? {
            Outcome::NoValue => continue,
            other => return Ok(other),
        }
    }
}

/// Collects `proc.arg_count` argument values from `cursor` by recursively
/// calling [`eval_expression`], then applies the procedure.
///
/// If the cursor runs dry, or a sub-expression turns out to be a statement
/// rather than a value, the failure is reported as "Found only k of n args"
/// per spec.md §4.6, not as whatever lower-level error would otherwise
/// apply.
pub fn apply_procedure(
    proc: &Rc<Procedure>,
    cursor: &mut TokenCursor,
    env: &mut Environment,
    source: &mut dyn LineSource,
) -> LogoResult<Outcome> {
    let mut args = Vec::with_capacity(proc.arg_count);
    for collected in 0..proc.arg_count {
        if cursor.is_empty() {
            return Err(too_few_args(proc, collected, cursor));
        }
        match eval_expression(cursor, env, source)? {
            Outcome::Value(v) => args.push(v),
            Outcome::NoValue | Outcome::Output(_) => {
                return Err(too_few_args(proc, collected, cursor));
            }
        }
    }

    match &proc.body {
        ProcBody::Native(f) => f(&args, env),
        ProcBody::UserDefined(lines) => apply_user_defined(proc, args, lines, env),
    }
}

fn too_few_args(proc: &Procedure, collected: usize, cursor: &TokenCursor) -> LogoError {
    LogoError::Arity(format!(
        "Found only {collected} of {} args at {cursor}",
        proc.arg_count
    ))
}

/// Binds `args` to `proc`'s formal parameters in a fresh frame, runs the
/// body one line at a time, and unwinds the frame on every exit path
/// (I5): natural exhaustion, an `output`/`stop` trap, a statement error, or
/// any other propagated error.
///
/// Body lines are already-collected tokens, not live input, so they run
/// against [`NoSource`] -- invariant I4 (no nested `to`) guarantees the
/// definition reader is never actually reached from in here.
fn apply_user_defined(
    proc: &Procedure,
    args: Vec<Value>,
    lines: &[Vec<Token>],
    env: &mut Environment,
) -> LogoResult<Outcome> {
    let mut bindings = AHashMap::default();
    for (name, value) in proc.formal_params.iter().zip(args) {
        bindings.insert(name.clone(), value);
    }
    env.push_frame(bindings);

    let mut no_source = NoSource;
    let mut result = Ok(Outcome::NoValue);
    for line in lines {
        let mut line_cursor = TokenCursor::new(line.clone());
        match eval_expression(&mut line_cursor, env, &mut no_source) {
            Ok(Outcome::Output(payload)) => {
                result = Ok(match payload {
                    Some(v) => Outcome::Value(v),
                    None => Outcome::NoValue,
                });
                break;
            }
            Ok(Outcome::NoValue) => continue,
            Ok(Outcome::Value(v)) => {
                result = Err(LogoError::Statement(format!(
                    "You do not say what to do with the result of {v}"
                )));
                break;
            }
            Err(e) => {
                result = Err(e);
                break;
            }
        }
    }

    env.pop_frame();
    result
}

/// Evaluates a list value as a line of code: converts it back to tokens
/// (undoing [`Value::from_token_data`]) and runs [`eval_line`] over them.
/// Used by `run`, `if`, and `ifelse` -- all native primitives, so there is
/// no live `LineSource` to hand down; a nested `to` here would violate I4
/// just as it would inside a user-defined body.
pub fn run_value_as_line(value: &Value, env: &mut Environment) -> LogoResult<Outcome> {
    let tokens = match value {
        Value::List(items) => items.iter().map(Value::to_token).collect(),
        other => vec![other.to_token()],
    };
    let mut cursor = TokenCursor::new(tokens);
    let mut no_source = NoSource;
    eval_line(&mut cursor, env, &mut no_source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;
    use crate::infix::rewrite_tokens;
    use crate::lexer::lex_line;
    use crate::source::FileSource;

    /// Runs `lines` as if they were fed to a session one top-level line at a
    /// time, with later lines available as continuation lines for any `to`
    /// definition -- mirrors how `Session::run` drives a `FileSource`.
    fn eval_program(env: &mut Environment, lines: &[&str]) -> LogoResult<Outcome> {
        let mut source = FileSource::from_lines(lines.iter().copied());
        let mut result = Ok(Outcome::NoValue);
        while let Some(line) = source.next_top_level_line() {
            let tokens = rewrite_tokens(&lex_line(&line).unwrap()).unwrap();
            let mut cursor = TokenCursor::new(tokens);
            result = eval_line(&mut cursor, env, &mut source);
            result.as_ref()?;
        }
        result
    }

    fn fresh_env() -> Environment {
        let mut env = Environment::with_sink(Box::new(crate::io::NoPrint));
        builtins::install(&mut env);
        env
    }

    #[test]
    fn arithmetic_scenario_one() {
        let mut env = fresh_env();
        let out = eval_program(&mut env, &["sum product 3 4 8"]).unwrap();
        assert_eq!(out, Outcome::Value(Value::Number(20.0)));
    }

    #[test]
    fn make_then_read_scenario_two() {
        let mut env = fresh_env();
        eval_program(&mut env, &["make \"x 12"]).unwrap();
        let out = eval_program(&mut env, &["sum 5 :x"]).unwrap();
        assert_eq!(out, Outcome::Value(Value::Number(17.0)));
    }

    #[test]
    fn factorial_via_user_defined_procedure() {
        let mut env = fresh_env();
        eval_program(
            &mut env,
            &[
                "to factorial :n",
                "output ifelse equal? :n 1 [1] [product :n factorial difference :n 1]",
                "end",
            ],
        )
        .unwrap();
        let out = eval_program(&mut env, &["factorial 5"]).unwrap();
        assert_eq!(out, Outcome::Value(Value::Number(120.0)));
    }

    #[test]
    fn if_rejects_non_boolean_guard() {
        let mut env = fresh_env();
        let err = eval_program(&mut env, &["if 1 [print 3]"]).unwrap_err();
        assert_eq!(
            err.message(),
            "First argument to \"if\" is not True or False: 1"
        );
    }

    #[test]
    fn infix_precedence_matches_arithmetic_convention() {
        let mut env = fresh_env();
        let out = eval_program(&mut env, &["3 + 4 * 5 + 6"]).unwrap();
        assert_eq!(out, Outcome::Value(Value::Number(29.0)));
    }

    #[test]
    fn unknown_procedure_reports_lookup_error() {
        let mut env = fresh_env();
        let err = eval_program(&mut env, &["frobnicate 1 2"]).unwrap_err();
        assert_eq!(err.message(), "I do not know how to frobnicate.");
    }

    #[test]
    fn missing_variable_reports_lookup_error() {
        let mut env = fresh_env();
        let err = eval_program(&mut env, &["print :ghost"]).unwrap_err();
        assert_eq!(err.message(), "ghost has no value");
    }

    #[test]
    fn running_out_of_arguments_reports_arity_error() {
        let mut env = fresh_env();
        let err = eval_program(&mut env, &["sum 1"]).unwrap_err();
        assert_eq!(err.message(), "Found only 1 of 2 args at sum 1 ^ ");
    }

    #[test]
    fn frame_balance_holds_across_a_failing_user_call() {
        let mut env = fresh_env();
        eval_program(&mut env, &["to boom :n", "output sum :n :missing", "end"]).unwrap();
        let depth_before = env.frame_depth();
        assert!(eval_program(&mut env, &["boom 1"]).is_err());
        assert_eq!(env.frame_depth(), depth_before);
    }

    #[test]
    fn output_trap_returns_through_exactly_one_frame() {
        let mut env = fresh_env();
        eval_program(
            &mut env,
            &[
                "to helper :y",
                "print :x :y",
                "output :y",
                "end",
                "to scope :x",
                "output helper sum :x 1",
                "end",
            ],
        )
        .unwrap();
        // "helper" has no local "x" of its own, so its free variable :x
        // resolves through "scope"'s still-on-the-stack frame -- not
        // helper's caller's caller (there is none here, it's global),
        // demonstrating dynamic-style fallthrough, not lexical capture.
        let out = eval_program(&mut env, &["scope 4"]).unwrap();
        assert_eq!(out, Outcome::Value(Value::Number(5.0)));
    }
}
