//! # lsys-turtle
//!
//! A parametric L-System grammar engine and engine-agnostic 3D turtle-graphics
//! interpreter.
//!
//! It decouples the *grammar* (axiom + rewrite rules, expanded into a symbol
//! string) from the *geometry* (a list of [`Segment`]s), so the output can be
//! ingested by game engines (Bevy), plotters, or mesh builders. The pipeline
//! has three pure stages:
//!
//! 1. [`RuleTable::expand`] rewrites the axiom for N generations.
//! 2. [`tokenize`] scans the expanded string into `(symbol, parameter)` tokens.
//! 3. [`TurtleInterpreter::interpret`] walks the tokens as a stack-based
//!    turtle, emitting drawable line segments.
//!
//! [`generate`] runs all three in one call.

pub mod grammar;
pub mod interpreter;
pub mod token;
pub mod turtle;

pub use grammar::*;
pub use interpreter::*;
pub use token::*;
pub use turtle::*;

/// Runs the full pipeline: expand `axiom` with `rules` for `iterations`
/// generations, tokenize the result, and interpret it under `config`.
///
/// Fails only if the grammar pops a branch it never pushed; see
/// [`TurtleInterpreter::interpret`].
pub fn generate(
    axiom: &str,
    rules: &[Rule],
    iterations: u32,
    config: &TurtleConfig,
) -> Result<Vec<Segment>, InterpretError> {
    let expanded = RuleTable::new(rules).expand(axiom, iterations);
    let tokens = tokenize(&expanded);
    TurtleInterpreter::new(config.clone()).interpret(&tokens)
}
