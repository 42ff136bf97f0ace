//! `sum`, `difference`, `product`, `div`.

use crate::environment::Environment;
use crate::error::{LogoError, LogoResult};
use crate::outcome::Outcome;
use crate::value::Value;

fn numeric(value: &Value, proc_name: &str) -> LogoResult<f64> {
    value
        .as_number()
        .ok_or_else(|| LogoError::Primitive(format!("{proc_name} expected a number, got {value}")))
}

fn sum(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Value(Value::Number(
        numeric(&args[0], "sum")? + numeric(&args[1], "sum")?,
    )))
}

fn difference(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Value(Value::Number(
        numeric(&args[0], "difference")? - numeric(&args[1], "difference")?,
    )))
}

fn product(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Value(Value::Number(
        numeric(&args[0], "product")? * numeric(&args[1], "product")?,
    )))
}

fn div(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    let a = numeric(&args[0], "div")?;
    let b = numeric(&args[1], "div")?;
    if b == 0.0 {
        return Err(LogoError::Primitive("division by zero".to_string()));
    }
    Ok(Outcome::Value(Value::Number(a / b)))
}

pub fn install(env: &mut Environment) {
    env.register(&["sum"], 2, false, sum);
    env.register(&["difference"], 2, false, difference);
    env.register(&["product"], 2, false, product);
    env.register(&["div"], 2, false, div);
}
