//! The primitive registry: core control primitives plus the library of
//! arithmetic, comparison, word/list, predicate, and printing procedures.
//!
//! One submodule per family; each exposes its own `install`, and
//! [`install`] here is the single entry point a fresh [`Environment`] calls
//! to get a fully populated procedure table.

mod arithmetic;
mod comparison;
mod control;
mod lists;
mod predicates;
mod printing;

use crate::environment::Environment;

pub fn install(env: &mut Environment) {
    control::install(env);
    arithmetic::install(env);
    comparison::install(env);
    lists::install(env);
    predicates::install(env);
    printing::install(env);
}
