//! `word`, `sentence`, `list`, `fput`, `first`, `last`, `butfirst`/`bf`.

use crate::environment::Environment;
use crate::error::{LogoError, LogoResult};
use crate::outcome::Outcome;
use crate::value::Value;

fn word_text(value: &Value, proc_name: &str) -> LogoResult<String> {
    match value {
        Value::Word(w) => Ok(w.clone()),
        Value::Number(_) => Ok(value.to_string()),
        Value::List(_) => Err(LogoError::Primitive(format!(
            "{proc_name} does not accept a list argument: {value}"
        ))),
    }
}

fn word(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    let mut text = word_text(&args[0], "word")?;
    text.push_str(&word_text(&args[1], "word")?);
    Ok(Outcome::Value(Value::Word(text)))
}

/// Flattens one argument into the output list: a list contributes its
/// elements, anything else contributes itself as a single element.
fn splice_into(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::List(items) => out.extend(items.iter().cloned()),
        other => out.push(other.clone()),
    }
}

fn sentence(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    let mut items = Vec::new();
    splice_into(&args[0], &mut items);
    splice_into(&args[1], &mut items);
    Ok(Outcome::Value(Value::List(items)))
}

fn list(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    Ok(Outcome::Value(Value::List(vec![
        args[0].clone(),
        args[1].clone(),
    ])))
}

fn fput(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    let tail = args[1].as_list().ok_or_else(|| {
        LogoError::Primitive(format!("fput expected a list, got {}", args[1]))
    })?;
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(args[0].clone());
    items.extend(tail.iter().cloned());
    Ok(Outcome::Value(Value::List(items)))
}

fn first(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    match &args[0] {
        Value::List(items) => items
            .first()
            .cloned()
            .map(Outcome::Value)
            .ok_or_else(|| LogoError::Primitive("first of an empty list".to_string())),
        Value::Word(w) => w
            .chars()
            .next()
            .map(|c| Outcome::Value(Value::Word(c.to_string())))
            .ok_or_else(|| LogoError::Primitive("first of an empty word".to_string())),
        other => Err(LogoError::Primitive(format!(
            "first expected a word or list, got {other}"
        ))),
    }
}

fn last(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    match &args[0] {
        Value::List(items) => items
            .last()
            .cloned()
            .map(Outcome::Value)
            .ok_or_else(|| LogoError::Primitive("last of an empty list".to_string())),
        Value::Word(w) => w
            .chars()
            .last()
            .map(|c| Outcome::Value(Value::Word(c.to_string())))
            .ok_or_else(|| LogoError::Primitive("last of an empty word".to_string())),
        other => Err(LogoError::Primitive(format!(
            "last expected a word or list, got {other}"
        ))),
    }
}

fn butfirst(args: &[Value], _env: &mut Environment) -> LogoResult<Outcome> {
    match &args[0] {
        Value::List(items) => {
            if items.is_empty() {
                return Err(LogoError::Primitive("butfirst of an empty list".to_string()));
            }
            Ok(Outcome::Value(Value::List(items[1..].to_vec())))
        }
        Value::Word(w) => {
            if w.is_empty() {
                return Err(LogoError::Primitive("butfirst of an empty word".to_string()));
            }
            Ok(Outcome::Value(Value::Word(
                w.chars().skip(1).collect::<String>(),
            )))
        }
        other => Err(LogoError::Primitive(format!(
            "butfirst expected a word or list, got {other}"
        ))),
    }
}

pub fn install(env: &mut Environment) {
    env.register(&["word"], 2, false, word);
    env.register(&["sentence"], 2, false, sentence);
    env.register(&["list"], 2, false, list);
    env.register(&["fput"], 2, false, fput);
    env.register(&["first"], 1, false, first);
    env.register(&["last"], 1, false, last);
    env.register(&["butfirst", "bf"], 1, false, butfirst);
}
