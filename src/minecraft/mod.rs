//! The vanilla Minecraft command instance of the parser.
//!
//! This module carries the declarative [command grammar](command_model), the
//! promotion layer that lifts the raw token forest into typed
//! [parameters](Parameter), and a process-wide [parser] resolved lazily from
//! the grammar on first use.
//!
//! ```
//! use gradier::minecraft::{self, Parameter, SelectorKind};
//!
//! let parameters = minecraft::parse("tp @s 0 64 0").unwrap();
//! assert_eq!(parameters[0], Parameter::Generic("tp".to_string()));
//! assert_eq!(
//!     parameters[1],
//!     Parameter::Selector { kind: SelectorKind::Executor, args: vec![] }
//! );
//! assert_eq!(minecraft::rebuild_command(&parameters), "tp @s 0 64 0");
//! ```

mod grammar;
mod parameter;

#[cfg(test)]
mod __tests__;

pub use grammar::{command_model, names};
pub use parameter::{
    parse_tokens, AdvancementValue, ArgumentValue, HybridPart, Parameter, RangeValue,
    SelectorArgument,
};

use crate::model::Model;
use crate::{ParseError, Parser, Token};
use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};

/// The five selector kinds, keyed by their `@` symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    AllPlayers,
    AllEntities,
    NearestPlayer,
    RandomPlayer,
    Executor,
}

impl SelectorKind {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "@a" => Some(SelectorKind::AllPlayers),
            "@e" => Some(SelectorKind::AllEntities),
            "@p" => Some(SelectorKind::NearestPlayer),
            "@r" => Some(SelectorKind::RandomPlayer),
            "@s" => Some(SelectorKind::Executor),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SelectorKind::AllPlayers => "@a",
            SelectorKind::AllEntities => "@e",
            SelectorKind::NearestPlayer => "@p",
            SelectorKind::RandomPlayer => "@r",
            SelectorKind::Executor => "@s",
        }
    }
}

impl Display for SelectorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An error returned while parsing a command: either the tokenizer rejected
/// the line, or a token could not be promoted to its typed form (an invalid
/// inner literal, such as a non-integer element in a byte array).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Syntax(ParseError),
    Promotion { message: String },
}

impl CommandError {
    pub(crate) fn promotion(message: String) -> Self {
        CommandError::Promotion { message }
    }
}

impl From<ParseError> for CommandError {
    fn from(error: ParseError) -> Self {
        CommandError::Syntax(error)
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Syntax(error) => write!(f, "{}", error),
            CommandError::Promotion { message } => write!(f, "PromotionError: {}", message),
        }
    }
}

static PARSER: Lazy<Parser> = Lazy::new(|| match Model::from_description(&command_model()) {
    Ok(model) => Parser::new(model),
    Err(err) => panic!("the builtin command grammar failed to resolve: {}", err),
});

/// The process-wide command parser, resolved from [command_model] on first
/// use and shared afterwards.
pub fn parser() -> &'static Parser {
    &PARSER
}

/// Tokenize a command line into the raw token forest.
pub fn tokenize(line: &str) -> Result<Vec<Token<'static>>, ParseError> {
    parser().tokenize(line)
}

/// Parse a command line into typed parameters.
pub fn parse(line: &str) -> Result<Vec<Parameter>, CommandError> {
    let tokens = tokenize(line)?;
    parse_tokens(&tokens)
}

/// Rebuild the command string from a parameter sequence: the parameters'
/// command-string forms joined by single spaces.
pub fn rebuild_command(parameters: &[Parameter]) -> String {
    let rendered: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
    rendered.join(" ")
}
