//! # dsml
//!
//! A compiler for the DSML format: a small line-oriented language that
//! describes deterministic finite-state machines (states, input symbols,
//! output symbols, transitions) and compiles them into a dense,
//! index-addressed runtime machine.
//!
//! The full pipeline is [`dsml::compile_source`]: tokenize each source line,
//! parse the per-line statement grammars into a symbolic model, validate the
//! model (single entry state, no duplicate symbols, full deterministic
//! transition coverage), and lower it into a [`dsml::Machine`].

pub mod dsml;
