//! Main module for DSML library functionality
//!
//! Processing happens in three stages:
//! 1. **Lexing**: each source line is tokenized and classified by its
//!    leading keyword ([`lexing`])
//! 2. **Parsing**: one parser per statement kind populates the symbolic
//!    [`Model`] ([`parsing`])
//! 3. **Validation + compilation**: the whole model is checked once
//!    ([`validation`]) and lowered into an index-addressed [`Machine`]
//!    ([`machine`])
//!
//! Any failure aborts the pipeline; parse failures carry the 1-based source
//! line number.

pub mod error;
pub mod lexing;
pub mod machine;
pub mod model;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod validation;

pub use error::{CompileError, MachineError, ParseError, ScriptError, ValidateError};
pub use machine::{Machine, MachineCell, MachineState};
pub use model::Model;
pub use parsing::parse_source;
pub use validation::validate;

/// Process a DSML source through the complete pipeline: parse, validate,
/// and compile.
///
/// This is the primary entry point. On success the returned [`Machine`]
/// owns all of its symbol strings; the intermediate model is dropped.
pub fn compile_source(source: &str) -> Result<Machine, CompileError> {
    let model = parse_source(source)?;
    validate(&model)?;
    let machine = Machine::compile(&model)?;
    Ok(machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsml::testing::TURNSTILE;

    #[test]
    fn compile_source_builds_a_machine() {
        let machine = compile_source(TURNSTILE).expect("turnstile source compiles");
        assert_eq!(machine.states().len(), 2);
        assert_eq!(machine.inputs().len(), 2);
        assert_eq!(machine.entry_state().symbol, "locked");
    }

    #[test]
    fn compile_source_reports_parse_errors_with_line() {
        let source = "state entry A\nstate entry B\n";
        let error = compile_source(source).unwrap_err();
        assert_eq!(
            error,
            CompileError::Parse(ScriptError {
                line: 2,
                error: ParseError::MultipleEntryStates,
            })
        );
    }

    #[test]
    fn compile_source_reports_validation_errors() {
        let error = compile_source("state entry A\n").unwrap_err();
        assert_eq!(error, CompileError::Validate(ValidateError::StaticMachine));
    }
}
