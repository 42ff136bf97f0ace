//! `empty?`/`emptyp`, `word?`.

use crate::environment::Environment;
use crate::error::LogoResult;
use crate::outcome::Outcome;
use crate::value::Value;

fn emptyp(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Value(Value::boolean(args[0].is_empty_sentence())))
}

fn wordp(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Value(Value::boolean(matches!(
        args[0],
        Value::Word(_)
    ))))
}

pub fn install(env: &mut Environment) {
    env.register(&["empty?", "emptyp"], 1, false, emptyp);
    env.register(&["word?"], 1, false, wordp);
}
