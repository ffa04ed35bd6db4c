use crate::{ModelError, ParseError};
use std::fmt::{Display, Formatter};

impl ParseError {
    pub fn invalid_token(line: &str, pointer: usize) -> Self {
        ParseError::InvalidToken {
            line: line.to_string(),
            pointer,
        }
    }

    pub fn non_existent_transition(line: &str, pointer: usize) -> Self {
        ParseError::NonExistentTransition {
            line: line.to_string(),
            pointer,
        }
    }

    pub fn incomplete_parsing(line: &str, pointer: usize) -> Self {
        ParseError::IncompleteParsing {
            line: line.to_string(),
            pointer,
        }
    }

    pub fn end_of_line(line: &str, pointer: usize) -> Self {
        ParseError::EndOfLine {
            line: line.to_string(),
            pointer,
        }
    }

    /// The base message of the variant, without the position suffix.
    pub fn message(&self) -> &'static str {
        match self {
            ParseError::InvalidToken { .. } => "Could not match line to an appropriate group",
            ParseError::NonExistentTransition { .. } => {
                "No transition exists for the given match"
            }
            ParseError::IncompleteParsing { .. } => "Unexpected end of parsing",
            ParseError::EndOfLine { .. } => "Unexpected end of line while parsing",
        }
    }

    /// The offending line.
    pub fn line(&self) -> &str {
        match self {
            ParseError::InvalidToken { line, .. }
            | ParseError::NonExistentTransition { line, .. }
            | ParseError::IncompleteParsing { line, .. }
            | ParseError::EndOfLine { line, .. } => line,
        }
    }

    /// Byte position within the line at which the failure was detected.
    pub fn pointer(&self) -> usize {
        match self {
            ParseError::InvalidToken { pointer, .. }
            | ParseError::NonExistentTransition { pointer, .. }
            | ParseError::IncompleteParsing { pointer, .. }
            | ParseError::EndOfLine { pointer, .. } => *pointer,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let remaining: String = self.line()[self.pointer()..].chars().take(10).collect();
        write!(f, "{} HERE --> {} ...", self.message(), remaining)
    }
}

impl ModelError {
    pub fn new(what: String, message: String) -> Self {
        Self { message, what }
    }

    pub fn what(&self) -> &str {
        &self.what
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelError: {}-{}", self.what, self.message)
    }
}
