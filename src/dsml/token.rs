//! Token definitions for the DSML format
//!
//! This module defines the tokens produced when lexing a single statement
//! line, plus the reserved-word tables shared by the lexer and the
//! statement parsers. Tokens are defined using the logos derive macro.
//!
//! The token grammar is deliberately loose: `Word` captures any run of
//! non-delimiter characters, and symbol syntax (alphanumeric, not a
//! reserved keyword) is enforced later by the statement parsers. This keeps
//! the lexer total (every line tokenizes) and lets the parsers report
//! precise per-symbol errors.

use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The six reserved DSML keywords. None may be used as a symbol name.
pub const KEYWORDS: [&str; 6] = ["state", "final", "entry", "input", "output", "trans"];

pub const KW_STATE: &str = "state";
pub const KW_FINAL: &str = "final";
pub const KW_ENTRY: &str = "entry";
pub const KW_INPUT: &str = "input";
pub const KW_OUTPUT: &str = "output";
pub const KW_TRANS: &str = "trans";

/// The marker used in a transition statement's output field to declare
/// that no output is produced.
pub const EMPTY_OUTPUT: &str = "-";

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Check whether a word is one of the six reserved keywords.
/// Comparison is case-sensitive.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// All possible tokens in a DSML statement line
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Field delimiter in transition statements
    #[token(":")]
    Colon,

    /// Runs of spaces and tabs between words
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Any run of characters that is neither whitespace nor a delimiter
    #[regex(r"[^ \t:]+", |lex| lex.slice().to_owned())]
    Word(String),
}

impl Token {
    /// Check if this token is a word
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// Check if this token is whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}

/// Statement kinds a line's leading keyword can introduce.
///
/// `final` and `entry` are modifiers inside a `state` statement, not
/// statement introducers; a line starting with either is an unknown
/// keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    State,
    Input,
    Output,
    Trans,
}

impl StatementKind {
    /// Map a leading keyword to its statement kind.
    pub fn from_keyword(word: &str) -> Option<StatementKind> {
        match word {
            KW_STATE => Some(StatementKind::State),
            KW_INPUT => Some(StatementKind::Input),
            KW_OUTPUT => Some(StatementKind::Output),
            KW_TRANS => Some(StatementKind::Trans),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(line: &str) -> Vec<Token> {
        Token::lexer(line).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_word_tokens() {
        let tokens = tokenize("state entry A");
        assert_eq!(
            tokens,
            vec![
                Token::Word("state".to_string()),
                Token::Whitespace,
                Token::Word("entry".to_string()),
                Token::Whitespace,
                Token::Word("A".to_string()),
            ]
        );
    }

    #[test]
    fn test_colon_delimits_words() {
        let tokens = tokenize("A : x : B : -");
        assert_eq!(
            tokens,
            vec![
                Token::Word("A".to_string()),
                Token::Whitespace,
                Token::Colon,
                Token::Whitespace,
                Token::Word("x".to_string()),
                Token::Whitespace,
                Token::Colon,
                Token::Whitespace,
                Token::Word("B".to_string()),
                Token::Whitespace,
                Token::Colon,
                Token::Whitespace,
                Token::Word("-".to_string()),
            ]
        );
    }

    #[test]
    fn test_colon_without_surrounding_whitespace() {
        let tokens = tokenize("A:x");
        assert_eq!(
            tokens,
            vec![
                Token::Word("A".to_string()),
                Token::Colon,
                Token::Word("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_tabs_are_whitespace() {
        let tokens = tokenize("input\ta\tb");
        assert_eq!(
            tokens,
            vec![
                Token::Word("input".to_string()),
                Token::Whitespace,
                Token::Word("a".to_string()),
                Token::Whitespace,
                Token::Word("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Word("x".to_string()).is_word());
        assert!(!Token::Colon.is_word());
        assert!(Token::Whitespace.is_whitespace());
        assert!(!Token::Word("x".to_string()).is_whitespace());
    }

    #[test]
    fn test_keyword_table() {
        for keyword in KEYWORDS {
            assert!(is_keyword(keyword));
        }
        assert!(!is_keyword("State"));
        assert!(!is_keyword("states"));
        assert!(!is_keyword("a"));
    }

    #[test]
    fn test_statement_kind_classification() {
        assert_eq!(StatementKind::from_keyword("state"), Some(StatementKind::State));
        assert_eq!(StatementKind::from_keyword("input"), Some(StatementKind::Input));
        assert_eq!(StatementKind::from_keyword("output"), Some(StatementKind::Output));
        assert_eq!(StatementKind::from_keyword("trans"), Some(StatementKind::Trans));
        // Modifiers do not introduce statements
        assert_eq!(StatementKind::from_keyword("final"), None);
        assert_eq!(StatementKind::from_keyword("entry"), None);
        assert_eq!(StatementKind::from_keyword("goto"), None);
    }
}
