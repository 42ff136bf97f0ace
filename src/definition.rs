//! The `to name :param ... / body / end` definition reader.
//!
//! Reached from [`crate::evaluator::eval_expression`] once `to` has already
//! been popped off the cursor; the remainder of that same line holds the
//! procedure name and its formal parameters. The body lines are not on the
//! cursor at all -- they come one at a time from `source`, exactly the
//! continuation lines spec.md's input collaborator supplies, until a line
//! that is just `end`.

use crate::cursor::TokenCursor;
use crate::environment::Environment;
use crate::error::{LogoError, LogoResult};
use crate::infix::rewrite_tokens;
use crate::lexer::lex_line;
use crate::procedure::Procedure;
use crate::source::{strip_comment, LineSource};
use crate::token::Token;

/// Reads one `to ... end` block and registers the resulting procedure.
/// `cursor` holds whatever followed `to` on its own line; `source` supplies
/// every line after that one.
pub fn read_definition(
    cursor: &mut TokenCursor,
    env: &mut Environment,
    source: &mut dyn LineSource,
) -> LogoResult<()> {
    let name = match cursor.pop() {
        Some(Token::Word(w)) => w,
        Some(other) => {
            return Err(LogoError::Syntax(format!(
                "Expected a procedure name after 'to', found '{other}'"
            )));
        }
        None => {
            return Err(LogoError::Syntax(
                "Expected a procedure name after 'to'".to_string(),
            ));
        }
    };

    let mut formal_params = Vec::new();
    loop {
        match cursor.current() {
            Some(Token::VarRef(_)) => {
                if let Some(Token::VarRef(param)) = cursor.pop() {
                    formal_params.push(param);
                }
            }
            _ => break,
        }
    }

    if !cursor.is_empty() {
        return Err(LogoError::Syntax(format!(
            "Unexpected tokens after formal parameters at {cursor}"
        )));
    }

    let mut lines = Vec::new();
    loop {
        let raw = source.next_continuation_line();
        let stripped = strip_comment(&raw).trim();
        if stripped == "end" {
            break;
        }
        let tokens = rewrite_tokens(&lex_line(stripped)?)?;
        if tokens.is_empty() {
            continue;
        }
        lines.push(tokens);
    }

    env.define_procedure(Procedure::user_defined(&name, formal_params, lines));
    Ok(())
}
