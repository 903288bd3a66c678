//! Statement lexer
//!
//! This module turns one raw source line into a classified statement: the
//! leading keyword's [`StatementKind`] plus the remainder tokens that the
//! statement parsers consume.
//!
//! Classification follows this order:
//! 1. Blank lines and comment lines are filtered out by the parse driver
//!    (`is_blank`, `is_comment`) before classification
//! 2. The first word must be one of the statement keywords
//!    (`state`, `input`, `output`, `trans`); anything else is an unknown
//!    keyword
//! 3. A keyword with no content after it is a parse error: the statement
//!    expects an expression

use logos::Logos;

use crate::dsml::error::ParseError;
use crate::dsml::token::{StatementKind, Token};

/// Tokenize a single source line.
pub fn tokenize(line: &str) -> Vec<Token> {
    Token::lexer(line).filter_map(|result| result.ok()).collect()
}

/// A line is blank if it contains nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A line is a comment if its first non-whitespace character is `#`.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// A classified statement: the leading keyword's kind and the remainder
/// tokens after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub rest: Vec<Token>,
}

/// Split a non-blank, non-comment line into its leading keyword and
/// remainder, classifying the keyword.
pub fn classify_line(line: &str) -> Result<Statement, ParseError> {
    let mut tokens = tokenize(line).into_iter();

    let keyword = loop {
        match tokens.next() {
            Some(Token::Whitespace) => continue,
            Some(Token::Word(word)) => break word,
            // A line leading with ':' has no keyword to dispatch on
            Some(Token::Colon) => return Err(ParseError::UnknownKeyword(":".to_string())),
            None => return Err(ParseError::ExpectedExpression),
        }
    };

    let kind = StatementKind::from_keyword(&keyword)
        .ok_or(ParseError::UnknownKeyword(keyword))?;

    let rest: Vec<Token> = tokens.collect();

    if !rest.iter().any(|token| !token.is_whitespace()) {
        return Err(ParseError::ExpectedExpression);
    }

    Ok(Statement { kind, rest })
}
