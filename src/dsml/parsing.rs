//! Parse driver
//!
//! Walks a DSML source line by line, skipping blank and comment lines,
//! classifying each remaining line and dispatching it to the matching
//! statement parser. Parsing is fail-fast: the first error aborts the walk
//! and is reported with its 1-based line number; the partially built model
//! is dropped.

pub mod statements;

use crate::dsml::error::ScriptError;
use crate::dsml::lexing::{self, Statement};
use crate::dsml::model::Model;
use crate::dsml::token::StatementKind;
use self::statements::IoDirection;

/// Parse a complete DSML source into a symbolic model.
///
/// The model grows monotonically as statements are consumed; semantic
/// well-formedness (entry state, coverage) is checked separately by
/// [`crate::dsml::validation::validate`] once the whole source has been
/// consumed.
pub fn parse_source(source: &str) -> Result<Model, ScriptError> {
    let mut model = Model::new();

    for (number, line) in source.lines().enumerate() {
        let line_number = number + 1;

        if lexing::is_blank(line) || lexing::is_comment(line) {
            continue;
        }

        let Statement { kind, rest } = lexing::classify_line(line)
            .map_err(|error| ScriptError { line: line_number, error })?;

        let outcome = match kind {
            StatementKind::State => statements::parse_state(&mut model, &rest),
            StatementKind::Input => statements::parse_io(&mut model, &rest, IoDirection::Input),
            StatementKind::Output => statements::parse_io(&mut model, &rest, IoDirection::Output),
            StatementKind::Trans => statements::parse_trans(&mut model, &rest),
        };

        outcome.map_err(|error| ScriptError { line: line_number, error })?;
    }

    Ok(model)
}
