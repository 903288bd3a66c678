//! Semantic validation of a parsed model
//!
//! Runs once after the entire source has been consumed without parse
//! errors. The checks are ordered and short-circuit on the first failure:
//! 1. At least one state declared
//! 2. An entry state declared
//! 3. At least one input symbol declared
//! 4. Every (state, input) pair has a transition, scanned in
//!    state-declaration order then input-declaration order
//!
//! Check 4, together with the parse-time conflict check, is the
//! determinism-and-completeness condition: a valid model has exactly
//! `state_count * input_count` transitions.

use crate::dsml::error::ValidateError;
use crate::dsml::model::Model;

/// Check global well-formedness of a fully parsed model.
pub fn validate(model: &Model) -> Result<(), ValidateError> {
    if model.states().is_empty() {
        return Err(ValidateError::EmptyMachine);
    }

    if !model.has_entry() {
        return Err(ValidateError::NoEntryState);
    }

    if model.inputs().is_empty() {
        return Err(ValidateError::StaticMachine);
    }

    for (state_index, state) in model.states().iter().enumerate() {
        for (input_index, input) in model.inputs().iter().enumerate() {
            if model.find_transition(state_index, input_index).is_none() {
                return Err(ValidateError::IndeterminateTransition {
                    state: state.symbol.clone(),
                    input: input.symbol.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsml::parsing::parse_source;

    #[test]
    fn empty_source_is_an_empty_machine() {
        let model = parse_source("# nothing here\n").unwrap();
        assert_eq!(validate(&model), Err(ValidateError::EmptyMachine));
    }

    #[test]
    fn missing_entry_state_is_detected() {
        let model = parse_source("state A\ninput x\ntrans A : x : A : -\n").unwrap();
        assert_eq!(validate(&model), Err(ValidateError::NoEntryState));
    }

    #[test]
    fn missing_inputs_make_a_static_machine() {
        let model = parse_source("state entry A\n").unwrap();
        assert_eq!(validate(&model), Err(ValidateError::StaticMachine));
    }

    #[test]
    fn uncovered_pair_is_indeterminate() {
        let source = "\
state entry A
state B
input x
trans A : x : B : -
";
        let model = parse_source(source).unwrap();
        assert_eq!(
            validate(&model),
            Err(ValidateError::IndeterminateTransition {
                state: "B".to_string(),
                input: "x".to_string(),
            })
        );
    }

    #[test]
    fn first_uncovered_pair_in_declaration_order_is_reported() {
        let source = "\
state entry A
state B
input x y
trans A : x : B : -
trans B : x y : B : -
";
        // A is missing y; B is fully covered. A comes first.
        let model = parse_source(source).unwrap();
        assert_eq!(
            validate(&model),
            Err(ValidateError::IndeterminateTransition {
                state: "A".to_string(),
                input: "y".to_string(),
            })
        );
    }

    #[test]
    fn complete_model_validates() {
        let source = "\
state entry A
state final B
input x
output y
trans A : x : B : y
trans B : x : B : -
";
        let model = parse_source(source).unwrap();
        assert_eq!(validate(&model), Ok(()));
    }
}
