//! The atom produced by the lexer and consumed by the evaluator.

use std::fmt;

/// One of the six infix symbols the rewriter recognizes (`+ - * / = > <`).
///
/// Never seen by the evaluator directly -- [`crate::infix`] rewrites every
/// occurrence into a prefix procedure call before a line reaches
/// [`crate::evaluator::eval_expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Lt,
    Gt,
}

impl InfixOp {
    /// The literal symbol this operator lexes from.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }

    /// The prefix procedure name this operator rewrites to (`+` -> `sum`, ...).
    pub fn prefix_name(self) -> &'static str {
        match self {
            Self::Add => "sum",
            Self::Sub => "difference",
            Self::Mul => "product",
            Self::Div => "div",
            Self::Eq => "equalp",
            Self::Lt => "lessp",
            Self::Gt => "greaterp",
        }
    }

    /// Precedence level, higher binds tighter. `* /` > `+ -` > `< > =`.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Lt | Self::Gt | Self::Eq => 0,
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "=" => Some(Self::Eq),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            _ => None,
        }
    }
}

/// A single lexical atom.
///
/// `List` already holds its contents as tokens, lexed recursively by the
/// lexer -- a bracketed region never reaches the evaluator as raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A bareword: a procedure name, keyword, or symbolic atom.
    Word(String),
    /// A parsed numeric literal.
    Number(f64),
    /// A bareword carrying a leading `"`, with the marker stripped from the
    /// stored name.
    QuotedWord(String),
    /// A bareword carrying a leading `:`, with the marker stripped from the
    /// stored name.
    VarRef(String),
    /// A bracketed region, lexed recursively.
    List(Vec<Token>),
    OpenParen,
    CloseParen,
    InfixOp(InfixOp),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => write!(f, "{w}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::QuotedWord(w) => write!(f, "\"{w}"),
            Self::VarRef(w) => write!(f, ":{w}"),
            Self::List(inner) => {
                write!(f, "[")?;
                for (i, tok) in inner.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{tok}")?;
                }
                write!(f, "]")
            }
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::InfixOp(op) => write!(f, "{}", op.symbol()),
        }
    }
}
