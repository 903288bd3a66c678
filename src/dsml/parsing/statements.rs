//! Per-statement parsers
//!
//! One parser per statement kind. Each consumes the remainder tokens of a
//! classified line, validates symbol syntax and uniqueness, and appends to
//! the model. Parsers return on the first error; the driver drops the
//! whole model on any failure, so partially applied statements are never
//! observable.
//!
//! Grammars:
//! - `state [final] [entry] <symbol>+`: modifiers precede all symbols and
//!   may each appear once; `entry` admits exactly one symbol
//! - `input <symbol>+` / `output <symbol>+`
//! - `trans <from> : <input>+ : <to> : <output>|-`: exactly four fields

use crate::dsml::error::ParseError;
use crate::dsml::model::{Model, Transition};
use crate::dsml::token::{self, Token, EMPTY_OUTPUT, KW_ENTRY, KW_FINAL};

/// Which IO namespace an `input`/`output` statement populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoDirection {
    Input,
    Output,
}

/// Check candidate symbol syntax: non-empty, every character alphanumeric,
/// and not one of the six reserved keywords. Case-sensitive.
pub fn validate_symbol(symbol: &str) -> Result<(), ParseError> {
    if symbol.is_empty() {
        return Err(ParseError::EmptySymbol);
    }
    if !symbol.chars().all(char::is_alphanumeric) || token::is_keyword(symbol) {
        return Err(ParseError::InvalidSymbol(symbol.to_owned()));
    }
    Ok(())
}

/// The word payloads of a token slice, ignoring whitespace.
///
/// A stray `:` cannot be part of any symbol, so it is rejected here for
/// the statement kinds that have no delimited fields.
fn symbol_words(tokens: &[Token]) -> Result<Vec<&str>, ParseError> {
    let mut words = Vec::new();
    for token in tokens {
        match token {
            Token::Word(word) => words.push(word.as_str()),
            Token::Whitespace => {}
            Token::Colon => return Err(ParseError::InvalidSymbol(":".to_owned())),
        }
    }
    Ok(words)
}

/// A field that must contain exactly one word.
fn single_word<'a>(tokens: &'a [Token]) -> Result<&'a str, ParseError> {
    let words = symbol_words(tokens)?;
    match words.as_slice() {
        [] => Err(ParseError::EmptySymbol),
        [word] => Ok(*word),
        _ => Err(ParseError::InvalidSymbol(words.join(" "))),
    }
}

/// Resolve a from-state/to-state field to a declared state's index.
fn resolve_state_field(model: &Model, tokens: &[Token]) -> Result<usize, ParseError> {
    let word = single_word(tokens)?;
    model
        .state_index(word)
        .ok_or_else(|| ParseError::UndefinedSymbol(word.to_owned()))
}

/// Parse the remainder of `state [final] [entry] <symbol>+`.
///
/// All declared symbols share the statement's modifier flags. A second
/// entry declaration anywhere in the source, or an `entry` statement
/// naming more than one symbol, is a multiple-entry error.
pub fn parse_state(model: &mut Model, rest: &[Token]) -> Result<(), ParseError> {
    let all_words = symbol_words(rest)?;
    let mut words = all_words.as_slice();

    let mut is_final = false;
    let mut is_entry = false;

    // Leading modifiers; each may appear at most once.
    loop {
        match words.first() {
            Some(&word) if word == KW_FINAL => {
                if is_final {
                    return Err(ParseError::RepeatedModifier(KW_FINAL.to_owned()));
                }
                is_final = true;
                words = &words[1..];
            }
            Some(&word) if word == KW_ENTRY => {
                if is_entry {
                    return Err(ParseError::RepeatedModifier(KW_ENTRY.to_owned()));
                }
                if model.has_entry() {
                    return Err(ParseError::MultipleEntryStates);
                }
                is_entry = true;
                words = &words[1..];
            }
            _ => break,
        }
    }

    if words.is_empty() {
        return Err(ParseError::EmptySymbol);
    }
    if is_entry && words.len() > 1 {
        return Err(ParseError::MultipleEntryStates);
    }

    for &symbol in words {
        validate_symbol(symbol)?;
        if model.has_state(symbol) {
            return Err(ParseError::RedefinedSymbol(symbol.to_owned()));
        }
        model.add_state(symbol, is_final, is_entry);
    }

    Ok(())
}

/// Parse the remainder of `input <symbol>+` or `output <symbol>+`.
///
/// Inputs and outputs are checked for redefinition independently; the same
/// name may legally appear in both namespaces.
pub fn parse_io(model: &mut Model, rest: &[Token], direction: IoDirection) -> Result<(), ParseError> {
    let words = symbol_words(rest)?;

    if words.is_empty() {
        return Err(ParseError::EmptySymbol);
    }

    for &symbol in &words {
        validate_symbol(symbol)?;

        let exists = match direction {
            IoDirection::Input => model.has_input(symbol),
            IoDirection::Output => model.has_output(symbol),
        };
        if exists {
            return Err(ParseError::RedefinedSymbol(symbol.to_owned()));
        }

        match direction {
            IoDirection::Input => model.add_input(symbol),
            IoDirection::Output => model.add_output(symbol),
        };
    }

    Ok(())
}

/// Parse the remainder of `trans <from> : <input>+ : <to> : <output>|-`.
///
/// One transition is created per input symbol named in the second field,
/// all sharing the statement's from-state, to-state, and output. Nothing
/// is appended until every field and conflict check has passed.
pub fn parse_trans(model: &mut Model, rest: &[Token]) -> Result<(), ParseError> {
    let fields: Vec<&[Token]> = rest.split(|token| matches!(token, Token::Colon)).collect();
    if fields.len() != 4 {
        return Err(ParseError::WrongArgumentCount { found: fields.len() });
    }

    let from_state = resolve_state_field(model, fields[0])?;

    let input_words = symbol_words(fields[1])?;
    if input_words.is_empty() {
        return Err(ParseError::EmptySymbol);
    }

    let mut inputs = Vec::with_capacity(input_words.len());
    for &word in &input_words {
        let input = model
            .input_index(word)
            .ok_or_else(|| ParseError::UndefinedSymbol(word.to_owned()))?;
        if inputs.contains(&input) {
            return Err(ParseError::RedefinedSymbol(word.to_owned()));
        }
        if model.find_transition(from_state, input).is_some() {
            return Err(ParseError::IndeterminateTransition {
                state: model.states()[from_state].symbol.clone(),
                input: word.to_owned(),
            });
        }
        inputs.push(input);
    }

    let to_state = resolve_state_field(model, fields[2])?;

    let output_word = single_word(fields[3])?;
    let output = if output_word == EMPTY_OUTPUT {
        None
    } else {
        let index = model
            .output_index(output_word)
            .ok_or_else(|| ParseError::UndefinedSymbol(output_word.to_owned()))?;
        Some(index)
    };

    for input in inputs {
        model.add_transition(Transition {
            from_state,
            input,
            to_state,
            output,
        });
    }

    Ok(())
}
