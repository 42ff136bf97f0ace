//! Precedence-climbing infix-to-prefix rewriter.
//!
//! Runs once per physical line, before the evaluator ever sees the tokens.
//! Operands are single tokens, or a whole `(...)`/`[...]` group collapsed
//! into one unit -- the rewriter has no notion of procedure arity, so it
//! cannot and does not try to swallow a multi-token prefix call as one
//! operand. Procedure arity is exactly what lets a rewritten prefix call
//! (e.g. `product 4 5`) sit inline in the output without needing its own
//! bracketing: the evaluator's argument collector consumes precisely as
//! many trailing tokens as that procedure's arity demands.

use crate::error::{LogoError, LogoResult};
use crate::token::Token;

/// Rewrites every infix occurrence in one line's tokens, recursing into
/// bracketed lists and parenthesized groups.
pub fn rewrite_tokens(tokens: &[Token]) -> LogoResult<Vec<Token>> {
    let mut pos = 0;
    let mut out = Vec::new();
    while pos < tokens.len() {
        out.extend(parse_chain(tokens, &mut pos, 0)?);
    }
    Ok(out)
}

/// One atomic operand: a single token, a `[...]` group with its contents
/// recursively rewritten, or a `(...)` group with its contents collapsed
/// through a full precedence climb.
fn parse_operand(tokens: &[Token], pos: &mut usize) -> LogoResult<Vec<Token>> {
    match tokens.get(*pos) {
        Some(Token::OpenParen) => {
            *pos += 1;
            let inner = parse_chain(tokens, pos, 0)?;
            match tokens.get(*pos) {
                Some(Token::CloseParen) => *pos += 1,
                _ => {
                    return Err(LogoError::Syntax(
                        "Expected ')' while rewriting infix expression".to_string(),
                    ));
                }
            }
            let mut group = vec![Token::OpenParen];
            group.extend(inner);
            group.push(Token::CloseParen);
            Ok(group)
        }
        Some(Token::List(inner)) => {
            let rewritten = rewrite_tokens(inner)?;
            *pos += 1;
            Ok(vec![Token::List(rewritten)])
        }
        Some(_) => {
            let tok = tokens[*pos].clone();
            *pos += 1;
            Ok(vec![tok])
        }
        None => Err(LogoError::Syntax(
            "Expected an operand while rewriting infix expression".to_string(),
        )),
    }
}

/// Parses one operand, then folds in as many `op operand` pairs at
/// precedence >= `min_prec` as apply, left-associatively: the right side of
/// each fold is parsed at `op.precedence() + 1`, which stops it from
/// swallowing a same-precedence sibling and forces the fold back to this
/// loop instead.
fn parse_chain(tokens: &[Token], pos: &mut usize, min_prec: u8) -> LogoResult<Vec<Token>> {
    let mut left = parse_operand(tokens, pos)?;
    while let Some(Token::InfixOp(op)) = tokens.get(*pos) {
        let op = *op;
        if op.precedence() < min_prec {
            break;
        }
        *pos += 1;
        let right = parse_chain(tokens, pos, op.precedence() + 1)?;
        let mut combined = vec![Token::Word(op.prefix_name().to_string())];
        combined.extend(left);
        combined.extend(right);
        left = combined;
    }
    Ok(left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex_line;

    fn rewrite(line: &str) -> Vec<Token> {
        rewrite_tokens(&lex_line(line).unwrap()).unwrap()
    }

    #[test]
    fn precedence_orders_multiplication_before_addition() {
        let tokens = rewrite("print 3 + 4 * 5 + 6");
        assert_eq!(
            tokens,
            vec![
                Token::Word("print".into()),
                Token::Word("sum".into()),
                Token::Word("sum".into()),
                Token::Number(3.0),
                Token::Word("product".into()),
                Token::Number(4.0),
                Token::Number(5.0),
                Token::Number(6.0),
            ]
        );
    }

    #[test]
    fn same_precedence_operators_are_left_associative() {
        let tokens = rewrite("2 - 3 - 4");
        assert_eq!(
            tokens,
            vec![
                Token::Word("difference".into()),
                Token::Word("difference".into()),
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn parenthesized_groups_are_rewritten_and_become_atomic_operands() {
        let tokens = rewrite("(3 + 4) * 5");
        assert_eq!(
            tokens,
            vec![
                Token::Word("product".into()),
                Token::OpenParen,
                Token::Word("sum".into()),
                Token::Number(3.0),
                Token::Number(4.0),
                Token::CloseParen,
                Token::Number(5.0),
            ]
        );
    }

    #[test]
    fn prefix_calls_with_no_operators_pass_through_unchanged() {
        let tokens = rewrite("print sum product 3 4 8");
        assert_eq!(
            tokens,
            vec![
                Token::Word("print".into()),
                Token::Word("sum".into()),
                Token::Word("product".into()),
                Token::Number(3.0),
                Token::Number(4.0),
                Token::Number(8.0),
            ]
        );
    }

    #[test]
    fn infix_inside_a_bracketed_list_is_rewritten_too() {
        let tokens = rewrite("if True [print 3 + 4]");
        match &tokens[2] {
            Token::List(inner) => {
                assert_eq!(
                    inner,
                    &vec![
                        Token::Word("print".into()),
                        Token::Word("sum".into()),
                        Token::Number(3.0),
                        Token::Number(4.0),
                    ]
                );
            }
            other => panic!("expected a list token, got {other:?}"),
        }
    }

    #[test]
    fn comparison_operators_have_lower_precedence_than_arithmetic() {
        let tokens = rewrite("1 + 2 = 3");
        assert_eq!(
            tokens,
            vec![
                Token::Word("equalp".into()),
                Token::Word("sum".into()),
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Number(3.0),
            ]
        );
    }
}
