//! The persistent object that owns one environment across many top-level
//! lines, in the manner of a long-lived interpreter session: construct
//! once, feed it lines, print results, keep going after an error.

use crate::builtins;
use crate::cursor::TokenCursor;
use crate::environment::Environment;
use crate::evaluator::eval_line;
use crate::infix::rewrite_tokens;
use crate::io::print_line;
use crate::lexer::lex_line;
use crate::outcome::Outcome;
use crate::source::{strip_comment, LineSource};

/// Case-insensitive words that end an interactive session cleanly.
const EXIT_WORDS: [&str; 3] = ["quit", "exit", "bye"];

pub struct Session {
    env: Environment,
    source: Box<dyn LineSource>,
}

impl Session {
    /// A session with a fresh environment (builtins already installed) over
    /// `source`.
    pub fn new(source: Box<dyn LineSource>) -> Self {
        let mut env = Environment::new();
        builtins::install(&mut env);
        Self { env, source }
    }

    /// A session over a caller-built environment, for tests that want to
    /// pre-seed variables or a custom print sink.
    pub fn with_environment(env: Environment, source: Box<dyn LineSource>) -> Self {
        Self { env, source }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Lexes, infix-rewrites, and evaluates one top-level line, printing its
    /// value (if any) or its error to the appropriate sink. Returns `false`
    /// when `raw` was `quit`/`exit`/`bye`, telling [`Session::run`] to stop.
    pub fn run_one_line(&mut self, raw: &str) -> bool {
        let trimmed = strip_comment(raw).trim();
        if EXIT_WORDS.iter().any(|word| trimmed.eq_ignore_ascii_case(word)) {
            return false;
        }
        if trimmed.is_empty() {
            return true;
        }

        let tokens = match lex_line(trimmed).and_then(|t| rewrite_tokens(&t)) {
            Ok(tokens) => tokens,
            Err(err) => {
                eprintln!("{err}");
                return true;
            }
        };

        let mut cursor = TokenCursor::new(tokens);
        match eval_line(&mut cursor, &mut self.env, self.source.as_mut()) {
            Ok(Outcome::Value(v)) => print_line(self.env.sink_mut(), &v.to_string()),
            Ok(Outcome::NoValue) => {}
            Ok(Outcome::Output(_)) => {
                eprintln!("output/stop used outside of a procedure");
            }
            Err(err) => eprintln!("{err}"),
        }
        true
    }

    /// Drives the session to exhaustion (file mode) or until an exit word
    /// or end-of-input (interactive mode), printing a farewell when an exit
    /// word ended the loop.
    pub fn run(&mut self) {
        while let Some(line) = self.source.next_top_level_line() {
            if !self.run_one_line(&line) {
                println!("bye!");
                return;
            }
        }
    }
}
