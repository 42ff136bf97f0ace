//! `equalp`/`equal?`, `lessp`/`less?`, `greaterp`/`greater?`.

use crate::environment::Environment;
use crate::error::{LogoError, LogoResult};
use crate::outcome::Outcome;
use crate::value::Value;

fn numeric(value: &Value, proc_name: &str) -> LogoResult<f64> {
    value
        .as_number()
        .ok_or_else(|| LogoError::Primitive(format!("{proc_name} expected a number, got {value}")))
}

fn equalp(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Value(Value::boolean(args[0] == args[1])))
}

fn lessp(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    let a = numeric(&args[0], "lessp")?;
    let b = numeric(&args[1], "lessp")?;
    Ok(Outcome::Value(Value::boolean(a < b)))
}

fn greaterp(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    let a = numeric(&args[0], "greaterp")?;
    let b = numeric(&args[1], "greaterp")?;
    Ok(Outcome::Value(Value::boolean(a > b)))
}

pub fn install(env: &mut Environment) {
    env.register(&["equalp", "equal?"], 2, false, equalp);
    env.register(&["lessp", "less?"], 2, false, lessp);
    env.register(&["greaterp", "greater?"], 2, false, greaterp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equalp_is_structural() {
        let mut env = Environment::with_sink(Box::new(crate::io::NoPrint));
        let out = equalp(
            &[
                Value::List(vec![Value::Number(1.0)]),
                Value::List(vec![Value::Number(1.0)]),
            ],
            &mut env,
        )
        .unwrap();
        assert_eq!(out, Outcome::Value(Value::boolean(true)));
    }

    #[test]
    fn lessp_compares_numerically() {
        let mut env = Environment::with_sink(Box::new(crate::io::NoPrint));
        let out = lessp(&[Value::Number(2.0), Value::Number(5.0)], &mut env).unwrap();
        assert_eq!(out, Outcome::Value(Value::boolean(true)));
    }
}
