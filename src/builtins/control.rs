//! The core's own control primitives: `type`, `make`, `if`, `ifelse`,
//! `output`, `stop`, `run`.
//!
//! These are registered against the same table as the library primitives in
//! the rest of [`crate::builtins`], but they live apart because most of them
//! route back into [`crate::evaluator`] instead of being pure data functions.

use crate::environment::Environment;
use crate::error::{LogoError, LogoResult};
use crate::evaluator::run_value_as_line;
use crate::io::print_no_newline;
use crate::outcome::Outcome;
use crate::value::Value;

fn type_(args: &[Value], env: &mut Environment) -> LogoResult<Outcome> {
    print_no_newline(env.sink_mut(), &args[0].display_unbracketed());
    Ok(Outcome::NoValue)
}

fn make(args: &[Value], env: &mut Environment) -> LogoResult<Outcome> {
    let name = args[0]
        .as_word()
        .ok_or_else(|| LogoError::Primitive(format!("make expected a word name, got {}", args[0])))?;
    env.set_variable_value(name, args[1].clone());
    Ok(Outcome::NoValue)
}

fn guard_bool(value: &Value, proc_name: &str) -> LogoResult<bool> {
    value.as_bool().ok_or_else(|| {
        LogoError::TypeGuard(format!(
            "First argument to \"{proc_name}\" is not True or False: {value}"
        ))
    })
}

fn if_(args: &[Value], env: &mut Environment) -> LogoResult<Outcome> {
    if guard_bool(&args[0], "if")? {
        run_value_as_line(&args[1], env)
    } else {
        Ok(Outcome::NoValue)
    }
}

fn ifelse(args: &[Value], env: &mut Environment) -> LogoResult<Outcome> {
    let branch = if guard_bool(&args[0], "ifelse")? {
        &args[1]
    } else {
        &args[2]
    };
    run_value_as_line(branch, env)
}

fn run(args: &[Value], env: &mut Environment) -> LogoResult<Outcome> {
    run_value_as_line(&args[0], env)
}

fn output(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Output(Some(args[0].clone())))
}

fn stop(_args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Output(None))
}

pub fn install(env: &mut Environment) {
    env.register(&["type"], 1, true, type_);
    env.register(&["make"], 2, true, make);
    env.register(&["if"], 2, true, if_);
    env.register(&["ifelse"], 3, true, ifelse);
    env.register(&["output"], 1, false, output);
    env.register(&["stop"], 0, false, stop);
    env.register(&["run"], 1, true, run);
}
