//! Parlance agent — library crate for the command interpreter.
//!
//! Re-exports all modules so external crates (e.g. `pl-e2e-tests`) can
//! access `CommandInterpreter`, the dispatcher table and the normalizer.

pub mod config;
pub mod dispatcher;
pub mod interpreter;
pub mod normalizer;
pub mod repl;
