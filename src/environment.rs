//! The frame stack plus the global procedure table.

use std::rc::Rc;

use ahash::AHashMap;

use crate::error::{LogoError, LogoResult};
use crate::io::{PrintWriter, StdPrint};
use crate::procedure::{NativeFn, Procedure};
use crate::value::Value;

/// One scope of local bindings.
pub type Frame = AHashMap<String, Value>;

/// A non-empty stack of frames plus the global procedure table and the
/// output sink primitives print through.
///
/// Invariant I1: `frames` is never empty -- `pop_frame` refuses to remove
/// frame 0.
pub struct Environment {
    frames: Vec<Frame>,
    procedures: AHashMap<String, Rc<Procedure>>,
    sink: Box<dyn PrintWriter>,
}

impl Environment {
    /// A fresh environment with only the global frame, no procedures
    /// registered, printing to stdout.
    pub fn new() -> Self {
        Self::with_sink(Box::new(StdPrint))
    }

    /// Same as [`Environment::new`] but printing through a caller-supplied
    /// sink -- the seam tests use to capture `print`/`show`/`type` output.
    pub fn with_sink(sink: Box<dyn PrintWriter>) -> Self {
        Self {
            frames: vec![Frame::default()],
            procedures: AHashMap::default(),
            sink,
        }
    }

    pub fn sink_mut(&mut self) -> &mut dyn PrintWriter {
        self.sink.as_mut()
    }

    /// Appends a new frame on top of the stack.
    pub fn push_frame(&mut self, bindings: Frame) {
        self.frames.push(bindings);
    }

    /// Removes the innermost frame. A no-op if only the global frame
    /// remains -- frame 0 is never popped (I1).
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// How many frames are currently on the stack. Used by tests asserting
    /// frame balance across a top-level line.
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    /// Searches from the innermost frame toward frame 0 (I2).
    pub fn lookup_variable(&self, name: &str) -> LogoResult<Value> {
        for frame in self.frames.iter().rev() {
            if let Some(v) = frame.get(name) {
                return Ok(v.clone());
            }
        }
        Err(LogoError::Lookup(format!("{name} has no value")))
    }

    /// Updates the innermost frame that already defines `name`; if none
    /// does, creates the binding in the global frame (I3).
    pub fn set_variable_value(&mut self, name: &str, value: Value) {
        for frame in self.frames.iter_mut().rev() {
            if frame.contains_key(name) {
                frame.insert(name.to_string(), value);
                return;
            }
        }
        self.frames[0].insert(name.to_string(), value);
    }

    /// Registers a user-defined or primitive procedure, overwriting any
    /// prior entry under the same name. Procedure bindings are global: they
    /// do not participate in frame scoping.
    pub fn define_procedure(&mut self, proc: Procedure) {
        self.procedures.insert(proc.name.clone(), Rc::new(proc));
    }

    pub fn lookup_procedure(&self, name: &str) -> LogoResult<Rc<Procedure>> {
        self.procedures
            .get(name)
            .cloned()
            .ok_or_else(|| LogoError::Lookup(format!("I do not know how to {name}.")))
    }

    pub fn has_procedure(&self, name: &str) -> bool {
        self.procedures.contains_key(name)
    }

    /// Registers one native descriptor under every name in `names` --
    /// aliasing (`equalp`/`equal?`) is "one descriptor, many names", not one
    /// descriptor duplicated per name with independent identity.
    pub fn register(&mut self, names: &[&str], arity: usize, needs_env: bool, f: NativeFn) {
        for name in names {
            self.define_procedure(Procedure::native(name, arity, needs_env, f));
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_through_to_global_frame() {
        let mut env = Environment::new();
        env.set_variable_value("x", Value::Number(3.0));
        env.push_frame(Frame::default());
        assert_eq!(env.lookup_variable("x").unwrap(), Value::Number(3.0));
    }

    #[test]
    fn lookup_prefers_innermost_frame() {
        let mut env = Environment::new();
        env.set_variable_value("x", Value::Number(3.0));
        let mut inner = Frame::default();
        inner.insert("x".to_string(), Value::Number(4.0));
        env.push_frame(inner);
        assert_eq!(env.lookup_variable("x").unwrap(), Value::Number(4.0));
    }

    #[test]
    fn missing_variable_is_a_lookup_error() {
        let env = Environment::new();
        let err = env.lookup_variable("nope").unwrap_err();
        assert_eq!(err.message(), "nope has no value");
    }

    #[test]
    fn set_variable_updates_existing_binding_in_innermost_defining_frame() {
        let mut env = Environment::new();
        env.set_variable_value("x", Value::Number(1.0));
        env.push_frame(Frame::default());
        env.set_variable_value("x", Value::Number(2.0));
        // no frame but global defines "x", so it was updated there, not
        // created fresh in the inner frame.
        env.pop_frame();
        assert_eq!(env.lookup_variable("x").unwrap(), Value::Number(2.0));
    }

    #[test]
    fn pop_frame_never_removes_the_global_frame() {
        let mut env = Environment::new();
        env.pop_frame();
        assert_eq!(env.frame_depth(), 1);
    }

    #[test]
    fn unknown_procedure_is_a_lookup_error() {
        let env = Environment::new();
        let err = env.lookup_procedure("frobnicate").unwrap_err();
        assert_eq!(err.message(), "I do not know how to frobnicate.");
    }
}
