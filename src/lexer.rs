//! Splits one physical source line into a flat sequence of tokens.

use crate::error::{LogoError, LogoResult};
use crate::token::{InfixOp, Token};

/// Lexes one physical line (comments already stripped) into tokens.
pub fn lex_line(line: &str) -> LogoResult<Vec<Token>> {
    let chars: Vec<char> = line.chars().collect();
    let mut pos = 0;
    let tokens = lex_tokens(&chars, &mut pos, false)?;
    Ok(tokens)
}

/// Lexes tokens until either the input is exhausted (top level) or a
/// matching `]` is found (`in_list`). Every `[` recurses into this same
/// function with `in_list = true`, so bracket nesting is handled by the
/// call stack rather than an explicit depth counter.
fn lex_tokens(chars: &[char], pos: &mut usize, in_list: bool) -> LogoResult<Vec<Token>> {
    let mut tokens = Vec::new();
    while *pos < chars.len() {
        let c = chars[*pos];
        if c.is_whitespace() {
            *pos += 1;
            continue;
        }
        match c {
            '(' => {
                tokens.push(Token::OpenParen);
                *pos += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen);
                *pos += 1;
            }
            '[' => {
                *pos += 1;
                let inner = lex_tokens(chars, pos, true)?;
                tokens.push(Token::List(inner));
            }
            ']' => {
                if in_list {
                    *pos += 1;
                    return Ok(tokens);
                }
                return Err(LogoError::Lex(format!(
                    "unexpected ']' at position {pos}"
                )));
            }
            _ => {
                let word = read_word(chars, pos);
                tokens.push(classify_word(&word)?);
            }
        }
    }
    if in_list {
        return Err(LogoError::Lex("unbalanced brackets: missing ']'".to_string()));
    }
    Ok(tokens)
}

/// Collects a maximal run of characters that aren't whitespace or one of
/// `()[]`. The caller is only invoked on such a character, so the result is
/// never empty.
fn read_word(chars: &[char], pos: &mut usize) -> String {
    let mut word = String::new();
    while *pos < chars.len() {
        let c = chars[*pos];
        if c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']') {
            break;
        }
        word.push(c);
        *pos += 1;
    }
    word
}

/// Turns a bareword into its token: an infix symbol, a quoted word, a
/// variable reference, a number, or a plain word, in that priority order.
fn classify_word(word: &str) -> LogoResult<Token> {
    if word.is_empty() {
        return Err(LogoError::Lex("empty token".to_string()));
    }
    if let Some(op) = InfixOp::from_symbol(word) {
        return Ok(Token::InfixOp(op));
    }
    if let Some(rest) = word.strip_prefix('"') {
        return Ok(Token::QuotedWord(rest.to_string()));
    }
    if let Some(rest) = word.strip_prefix(':') {
        return Ok(Token::VarRef(rest.to_string()));
    }
    if let Ok(n) = word.parse::<f64>() {
        if n.is_finite() {
            return Ok(Token::Number(n));
        }
    }
    Ok(Token::Word(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_a_simple_command_line() {
        let tokens = lex_line("print sum product 3 4 8").unwrap();
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
    fn nested_brackets_become_nested_list_tokens() {
        let tokens = lex_line("output [a [b c] d]").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("output".into()),
                Token::List(vec![
                    Token::Word("a".into()),
                    Token::List(vec![Token::Word("b".into()), Token::Word("c".into())]),
                    Token::Word("d".into()),
                ]),
            ]
        );
    }

    #[test]
    fn quoted_word_and_varref_keep_their_names_without_markers() {
        let tokens = lex_line("make \"x :y").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("make".into()),
                Token::QuotedWord("x".into()),
                Token::VarRef("y".into()),
            ]
        );
    }

    #[test]
    fn parens_are_independent_tokens_regardless_of_adjacency() {
        let tokens = lex_line("(sum 1 2)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::OpenParen,
                Token::Word("sum".into()),
                Token::Number(1.0),
                Token::Number(2.0),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn standalone_infix_symbols_are_recognized() {
        let tokens = lex_line("3 + 4 * 5").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(3.0),
                Token::InfixOp(InfixOp::Add),
                Token::Number(4.0),
                Token::InfixOp(InfixOp::Mul),
                Token::Number(5.0),
            ]
        );
    }

    #[test]
    fn unmatched_close_bracket_is_a_lex_error() {
        assert!(lex_line("print 1]").is_err());
    }

    #[test]
    fn unmatched_open_bracket_is_a_lex_error() {
        assert!(lex_line("print [1 2").is_err());
    }
}
