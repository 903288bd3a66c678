//! Error types for DSML parsing, validation, and machine compilation
//!
//! Errors are split by pipeline stage: [`ParseError`] for a single
//! statement, [`ScriptError`] tagging a parse error with its source line,
//! [`ValidateError`] for whole-model rules, and [`MachineError`] for
//! internal-consistency defects during compilation. [`CompileError`] is the
//! umbrella returned by the front-to-back pipeline.
//!
//! The parse is fail-fast: the first error aborts it, and the partially
//! built model is dropped. There is no multi-error accumulation.

use std::fmt;

/// Errors produced while parsing a single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A statement keyword with nothing after it
    ExpectedExpression,
    /// The line's leading token is not a statement keyword
    UnknownKeyword(String),
    /// A symbol was required but none was present
    EmptySymbol,
    /// The symbol is not purely alphanumeric, or is a reserved keyword
    InvalidSymbol(String),
    /// A referenced symbol was never declared
    UndefinedSymbol(String),
    /// The symbol is already declared in the same category
    RedefinedSymbol(String),
    /// A `state` modifier (`final`/`entry`) appeared more than once
    RepeatedModifier(String),
    /// A transition statement did not have exactly four `:`-separated fields
    WrongArgumentCount { found: usize },
    /// A second entry state was declared
    MultipleEntryStates,
    /// A transition for this (from-state, input) pair already exists
    IndeterminateTransition { state: String, input: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedExpression => {
                write!(f, "statement expects an expression")
            }
            ParseError::UnknownKeyword(keyword) => {
                write!(f, "unknown keyword '{keyword}'")
            }
            ParseError::EmptySymbol => {
                write!(f, "entity symbol is empty or absent")
            }
            ParseError::InvalidSymbol(symbol) => {
                write!(
                    f,
                    "invalid symbol '{symbol}': symbols are alphanumeric and may not be keywords"
                )
            }
            ParseError::UndefinedSymbol(symbol) => {
                write!(f, "undefined symbol '{symbol}' is referenced")
            }
            ParseError::RedefinedSymbol(symbol) => {
                write!(f, "symbol '{symbol}' is redefined")
            }
            ParseError::RepeatedModifier(modifier) => {
                write!(f, "modifier '{modifier}' is repeated")
            }
            ParseError::WrongArgumentCount { found } => {
                write!(f, "expected 4 ':'-separated fields, found {found}")
            }
            ParseError::MultipleEntryStates => {
                write!(f, "multiple entry states declared")
            }
            ParseError::IndeterminateTransition { state, input } => {
                write!(
                    f,
                    "transition from state '{state}' on input '{input}' is already defined"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A statement-level parse error tagged with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub error: ParseError,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {}

/// Errors produced by whole-model validation after a successful parse.
///
/// The checks run in this order and stop at the first violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// No states declared
    EmptyMachine,
    /// No state carries the `entry` modifier
    NoEntryState,
    /// No input symbols declared; the machine could never transition
    StaticMachine,
    /// Some (state, input) pair has no transition
    IndeterminateTransition { state: String, input: String },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::EmptyMachine => {
                write!(f, "machine is empty: no states declared")
            }
            ValidateError::NoEntryState => {
                write!(f, "entry state is not declared")
            }
            ValidateError::StaticMachine => {
                write!(f, "machine is static: no inputs declared")
            }
            ValidateError::IndeterminateTransition { state, input } => {
                write!(f, "no transition from state '{state}' on input '{input}'")
            }
        }
    }
}

impl std::error::Error for ValidateError {}

/// Internal-consistency failures during machine compilation.
///
/// Compilation assumes a validated model; these indicate a defect in the
/// caller (compiling a model that never passed validation), not a
/// user-facing input error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// The model does not satisfy the validator's guarantees
    UnvalidatedModel,
    /// A (state, input) pair had no transition during row construction
    MissingTransition { state: String, input: String },
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineError::UnvalidatedModel => {
                write!(f, "internal error: model was not validated before compilation")
            }
            MachineError::MissingTransition { state, input } => {
                write!(
                    f,
                    "internal error: no transition from state '{state}' on input '{input}' in a validated model"
                )
            }
        }
    }
}

impl std::error::Error for MachineError {}

/// Any failure of the front-to-back compile pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Parse(ScriptError),
    Validate(ValidateError),
    Machine(MachineError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(error) => error.fmt(f),
            CompileError::Validate(error) => error.fmt(f),
            CompileError::Machine(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<ScriptError> for CompileError {
    fn from(error: ScriptError) -> Self {
        CompileError::Parse(error)
    }
}

impl From<ValidateError> for CompileError {
    fn from(error: ValidateError) -> Self {
        CompileError::Validate(error)
    }
}

impl From<MachineError> for CompileError {
    fn from(error: MachineError) -> Self {
        CompileError::Machine(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_error_includes_line_number() {
        let error = ScriptError {
            line: 7,
            error: ParseError::UnknownKeyword("goto".to_string()),
        };
        assert_eq!(error.to_string(), "error at line 7: unknown keyword 'goto'");
    }

    #[test]
    fn validate_error_messages() {
        assert_eq!(
            ValidateError::StaticMachine.to_string(),
            "machine is static: no inputs declared"
        );
        let error = ValidateError::IndeterminateTransition {
            state: "B".to_string(),
            input: "x".to_string(),
        };
        assert_eq!(error.to_string(), "no transition from state 'B' on input 'x'");
    }

    #[test]
    fn compile_error_delegates_display() {
        let error = CompileError::from(ValidateError::NoEntryState);
        assert_eq!(error.to_string(), "entry state is not declared");
    }
}
