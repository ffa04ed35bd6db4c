//! Gradier is a configurable tokenizer and semantic parser for game console
//! commands, with the Minecraft command syntax shipped as the primary
//! instance (see the [minecraft] module).
//!
//! # Overview
//! A command line like `kill @e[type=!zombie,scores={kills=1..}]` mixes
//! several small languages: entity selectors, namespaced identifiers,
//! block-state maps and textual NBT payloads. Writing a custom parser for
//! every such surface quickly becomes a maintenance burden.
//! This library instead drives a single data-driven pushdown automaton: the
//! lexer states, their terminal groups, the transitions between them and the
//! stack operations attached to those transitions are all loaded from a
//! declarative [ModelDescription](model::ModelDescription).
//! Tokenization therefore produces a nested token forest directly, and a
//! promotion layer lifts the raw forest into typed
//! [parameters](minecraft::Parameter) from which the command string can be
//! rebuilt.
//!
//! # Design
//! A [Model](model::Model) is an immutable graph of named [states](model::State)
//! organized into named regions. Each state owns an ordered list of
//! [groups](model::Group) (named regular expressions, compiled into a single
//! anchored alternation) and an ordered list of
//! [transitions](model::Transition). A transition may push the current token
//! onto a stack, peek at the stack, pop it, or end tokenization; pushing and
//! popping is what turns the flat match loop into a builder of nested token
//! trees.
//! The [Parser] drives the automaton over an input line and yields the token
//! forest; [minecraft::parse] additionally promotes the forest into
//! parameters.
//!
//! # Example
//!
//! ```
//! use gradier::model::{
//!     GroupDef, Model, ModelDescription, Operation, RegionDescription, StateDescription,
//!     StateRef, TransitionDescription,
//! };
//! use gradier::Parser;
//! use std::collections::HashMap;
//!
//! // A model with a single state that splits a line into words and ends at
//! // the end of the line.
//! let mut states = HashMap::new();
//! states.insert(
//!     "words".to_string(),
//!     StateDescription::new(&["Word", "Space", "EOL"])
//!         .define(GroupDef::new("Space", r"\s+"))
//!         .define(GroupDef::new("EOL", r"$"))
//!         .transition(TransitionDescription::on("EOL", Operation::End)),
//! );
//! let description = ModelDescription::new(StateRef::new("main", "words"))
//!     .region("main", RegionDescription::new(states));
//!
//! let model = Model::from_description(&description).unwrap();
//! let parser = Parser::new(model);
//! let tokens = parser.tokenize("tp base").unwrap();
//! let words: Vec<&str> = tokens.iter().map(|t| t.matched()).collect();
//! assert_eq!(words, vec!["tp", " ", "base", ""]);
//! ```
//!
//! # License
//! [gradier](crate) is provided under the MIT license.

mod error;
mod logger;
pub mod minecraft;
pub mod model;
pub mod nbt;
mod parser;
mod token;

use model::{Group, Model};
use once_cell::sync::OnceCell;

/// A node of the raw token forest produced by [Parser::tokenize].
///
/// A token records the verbatim matched text, the [Group] that matched it
/// (borrowed from the [Model], which outlives every parse), and the child
/// tokens consumed between the push that opened this token and the matching
/// pop. A token exclusively owns its children.
#[derive(Debug, Clone)]
pub struct Token<'m> {
    matched: String,
    group: &'m Group,
    children: Vec<Token<'m>>,
}

/// The pushdown driver.
///
/// A [Parser] owns an immutable [Model] and repeatedly matches the current
/// state's compound pattern at the cursor, emits a token, resolves a
/// transition for the matched group and applies its stack operation, until an
/// end transition fires. See [Parser::tokenize].
pub struct Parser {
    model: Model,
    log: OnceCell<Log<&'static str>>,
}

/// An error returned when an input line cannot be tokenized.
///
/// Every variant keeps the offending line and the byte position at which the
/// failure was detected; the rendered message is suffixed with
/// ` HERE --> ` and the next few characters of the remaining input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The current state's compound pattern did not match at the cursor.
    InvalidToken { line: String, pointer: usize },
    /// No transition could be applied for the matched group.
    NonExistentTransition { line: String, pointer: usize },
    /// Tokenization ended while input remained.
    IncompleteParsing { line: String, pointer: usize },
    /// The input ended inside a nested construct (non-empty stack).
    EndOfLine { line: String, pointer: usize },
}

/// An error raised once, at [Model](model::Model) construction time, for a
/// missing region, state, group or template reference, or a malformed group
/// pattern.
#[derive(Debug)]
pub struct ModelError {
    what: String,
    message: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A enum structure to assign multiple level debugging to the [Parser].
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}
