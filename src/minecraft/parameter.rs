use super::grammar::names;
use super::{CommandError, SelectorKind};
use crate::nbt::{unescape_string, Tag, TagPayload};
use crate::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

/// A promoted command parameter. Its [Display] form is the command-string
/// form, so joining a parameter sequence with single spaces rebuilds the
/// command.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// A bare keyword such as a command name.
    Generic(String),
    /// An unstructured parameter whose string form is its match.
    Raw(String),
    /// An entity selector with its argument list.
    Selector {
        kind: SelectorKind,
        args: Vec<SelectorArgument>,
    },
    /// A `namespace:name` identifier with optional block states and NBT.
    NamespacedId {
        namespace: Option<String>,
        name: String,
        block_states: Vec<(String, String)>,
        nbt: Tag,
    },
    /// A standalone NBT payload.
    Nbt(Tag),
    /// An integer range literal.
    Range(RangeValue),
    /// A comment line; rebuilt as `# ` followed by the text.
    Comment(String),
    /// A parameter combined from several parts whose overall type is
    /// ambiguous, such as an NBT path step with indices.
    Hybrid(Vec<HybridPart>),
}

/// A selector argument: a name with a corresponding value, optionally
/// negated (`name=!value`).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorArgument {
    pub name: String,
    pub value: ArgumentValue,
    pub negated: bool,
}

/// The value of a [SelectorArgument].
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Raw(String),
    Nbt(Tag),
    /// Objective name to range, in written order.
    Scores(Vec<(String, RangeValue)>),
    /// Advancement id to completion or per-criterion map, in written order.
    Advancements(Vec<(String, AdvancementValue)>),
}

/// The value of one advancements entry: finished-or-not, or a nested
/// criteria map.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvancementValue {
    Done(bool),
    Criteria(Vec<(String, bool)>),
}

/// One part of a [Parameter::Hybrid].
#[derive(Debug, Clone, PartialEq)]
pub enum HybridPart {
    Nbt(Tag),
    BlockStates(Vec<(String, String)>),
    ListIndex(Box<HybridPart>),
    Raw(String),
}

/// An integer range: either a single value or an optionally half-open
/// `low..high` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeValue {
    pub low: Option<i64>,
    pub high: Option<i64>,
    pub single: Option<i64>,
}

fn range_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:(?P<int>-?\d+)$|(?P<low>-?\d+)?\.{0,2}(?P<high>-?\d+)?)").unwrap()
    });
    &PATTERN
}

impl RangeValue {
    pub fn single(value: i64) -> Self {
        Self {
            low: None,
            high: None,
            single: Some(value),
        }
    }

    pub fn bounded(low: Option<i64>, high: Option<i64>) -> Self {
        Self {
            low,
            high,
            single: None,
        }
    }

    /// Parse a range literal. The endpoints are taken from whichever named
    /// captures participated, so `0` is a valid single value.
    pub fn parse(literal: &str) -> Result<Self, CommandError> {
        let captures = range_pattern().captures(literal).ok_or_else(|| {
            CommandError::promotion(format!("'{}' is not a range literal", literal))
        })?;
        let endpoint = |name: &str| -> Result<Option<i64>, CommandError> {
            captures
                .name(name)
                .map(|m| {
                    m.as_str().parse::<i64>().map_err(|_| {
                        CommandError::promotion(format!(
                            "range endpoint '{}' is out of bounds",
                            m.as_str()
                        ))
                    })
                })
                .transpose()
        };
        Ok(Self {
            single: endpoint("int")?,
            low: endpoint("low")?,
            high: endpoint("high")?,
        })
    }

    /// Whether the range is a single value.
    pub fn is_single(&self) -> bool {
        self.single.is_some()
    }
}

impl Display for RangeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(single) = self.single {
            return write!(f, "{}", single);
        }
        match (self.low, self.high) {
            (Some(low), Some(high)) => write!(f, "{}..{}", low, high),
            (Some(low), None) => write!(f, "{}..", low),
            (None, Some(high)) => write!(f, "..{}", high),
            (None, None) => Ok(()),
        }
    }
}

/// Promote a top-level raw token sequence into typed parameters.
pub fn parse_tokens(tokens: &[Token]) -> Result<Vec<Parameter>, CommandError> {
    let mut parameters = Vec::new();
    for token in tokens {
        match token.group_name() {
            names::EOL => break,
            names::SELECTOR_PARAMETER => parameters.push(promote_selector(token)?),
            names::NAMESPACED_ID => parameters.push(promote_namespaced_id(token)?),
            names::HYBRID_PARAMETER => parameters.push(promote_hybrid(token)?),
            names::COMMENT => parameters.push(Parameter::Comment(token.matched().to_string())),
            names::KEYWORD => parameters.push(Parameter::Generic(token.matched().to_string())),
            names::RANGE => parameters.push(Parameter::Range(RangeValue::parse(token.matched())?)),
            _ => parameters.push(Parameter::Raw(token.matched().to_string())),
        }
    }
    Ok(parameters)
}

fn promote_selector(token: &Token) -> Result<Parameter, CommandError> {
    let kind = SelectorKind::from_symbol(token.matched()).ok_or_else(|| {
        CommandError::promotion(format!("unknown selector '{}'", token.matched()))
    })?;
    // The last child, when present, is the closing bracket sentinel.
    let arg_tokens = token
        .children()
        .split_last()
        .map_or(&[][..], |(_, args)| args);

    let mut args = Vec::new();
    for arg in arg_tokens {
        let negated = arg
            .children()
            .first()
            .map_or(false, |child| child.group_name() == names::NEGATION);
        let value_token = arg
            .children()
            .get(if negated { 1 } else { 0 })
            .ok_or_else(|| {
                CommandError::promotion(format!(
                    "selector argument '{}' has no value",
                    arg.matched()
                ))
            })?;
        let value = match arg.group_name() {
            names::SCORES_ARGUMENT => ArgumentValue::Scores(promote_scores(value_token)?),
            names::NBT_ARGUMENT => ArgumentValue::Nbt(tag_from_value("", value_token)?),
            names::ADVANCEMENTS_ARGUMENT => {
                ArgumentValue::Advancements(promote_advancements(value_token)?)
            }
            _ => ArgumentValue::Raw(value_token.matched().to_string()),
        };
        args.push(SelectorArgument {
            name: arg.matched().to_string(),
            value,
            negated,
        });
    }
    Ok(Parameter::Selector { kind, args })
}

fn promote_namespaced_id(token: &Token) -> Result<Parameter, CommandError> {
    let matched = token.matched();
    let (namespace, name) = match matched.find(':') {
        Some(colon) => (Some(matched[..colon].to_string()), matched[colon + 1..].to_string()),
        None => (None, matched.to_string()),
    };

    let mut block_states = Vec::new();
    let mut nbt = Tag::empty_compound();
    for child in token.children() {
        match child.group_name() {
            names::BLOCK_STATES_OPEN => block_states = promote_block_states(child)?,
            names::COMPOUND_OPEN => nbt = tag_from_value("", child)?,
            _ => {}
        }
    }
    Ok(Parameter::NamespacedId {
        namespace,
        name,
        block_states,
        nbt,
    })
}

fn promote_hybrid(token: &Token) -> Result<Parameter, CommandError> {
    let mut parts = Vec::new();
    for child in token.children() {
        if child.group_name() == names::HYBRID_END {
            continue;
        }
        parts.push(hybrid_part(child)?);
    }
    Ok(Parameter::Hybrid(parts))
}

fn hybrid_part(token: &Token) -> Result<HybridPart, CommandError> {
    match token.group_name() {
        names::COMPOUND_OPEN | names::LIST_OPEN => Ok(HybridPart::Nbt(tag_from_value("", token)?)),
        names::BLOCK_STATES_OPEN => Ok(HybridPart::BlockStates(promote_block_states(token)?)),
        names::LIST_INDEX_OPEN => {
            let index = token.children().first().ok_or_else(|| {
                CommandError::promotion("a list index has no index value".to_string())
            })?;
            Ok(HybridPart::ListIndex(Box::new(hybrid_part(index)?)))
        }
        _ => Ok(HybridPart::Raw(token.matched().to_string())),
    }
}

fn promote_block_states(token: &Token) -> Result<Vec<(String, String)>, CommandError> {
    let mut states = Vec::new();
    for entry in token.children() {
        if entry.group_name() == names::BLOCK_STATES_END {
            break;
        }
        let value = entry.children().first().ok_or_else(|| {
            CommandError::promotion(format!("block state '{}' has no value", entry.matched()))
        })?;
        states.push((entry.matched().to_string(), value.matched().to_string()));
    }
    Ok(states)
}

fn promote_scores(value: &Token) -> Result<Vec<(String, RangeValue)>, CommandError> {
    let mut scores = Vec::new();
    for entry in value.children() {
        if entry.group_name() == names::SCORES_CLOSE {
            break;
        }
        let range = entry.children().first().ok_or_else(|| {
            CommandError::promotion(format!("score '{}' has no range", entry.matched()))
        })?;
        scores.push((entry.matched().to_string(), RangeValue::parse(range.matched())?));
    }
    Ok(scores)
}

fn promote_advancements(value: &Token) -> Result<Vec<(String, AdvancementValue)>, CommandError> {
    let mut advancements = Vec::new();
    for entry in value.children() {
        if entry.group_name() == names::ADVANCEMENTS_CLOSE {
            break;
        }
        let entry_value = entry.children().first().ok_or_else(|| {
            CommandError::promotion(format!(
                "advancement '{}' has no value",
                entry.matched()
            ))
        })?;
        let promoted = if entry_value.group_name() == names::CRITERIA_OPEN {
            AdvancementValue::Criteria(promote_criteria(entry_value)?)
        } else {
            AdvancementValue::Done(bool_value(entry_value)?)
        };
        advancements.push((entry.matched().to_string(), promoted));
    }
    Ok(advancements)
}

fn promote_criteria(value: &Token) -> Result<Vec<(String, bool)>, CommandError> {
    let mut criteria = Vec::new();
    for entry in value.children() {
        if entry.group_name() == names::CRITERIA_CLOSE {
            break;
        }
        let flag = entry.children().first().ok_or_else(|| {
            CommandError::promotion(format!("criterion '{}' has no value", entry.matched()))
        })?;
        criteria.push((entry.matched().to_string(), bool_value(flag)?));
    }
    Ok(criteria)
}

fn bool_value(token: &Token) -> Result<bool, CommandError> {
    match token.matched() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(CommandError::promotion(format!(
            "'{}' is not a boolean value",
            other
        ))),
    }
}

/// Build a named tag from an entry token: the entry's match is the tag name
/// and its first child is the value token.
fn tag_from_entry(entry: &Token) -> Result<Tag, CommandError> {
    let value = entry.children().first().ok_or_else(|| {
        CommandError::promotion(format!("tag '{}' has no value", entry.matched()))
    })?;
    tag_from_value(entry.matched(), value)
}

/// Classify a value token into a tag payload by the shape of its group.
fn tag_from_value(name: &str, value: &Token) -> Result<Tag, CommandError> {
    let payload = match value.group_name() {
        names::NUMBER => number_payload(value.matched())?,
        names::STRING => {
            let matched = value.matched();
            TagPayload::String(unescape_string(&matched[1..matched.len() - 1]))
        }
        names::WORD => match value.matched() {
            "true" => TagPayload::Boolean(true),
            "false" => TagPayload::Boolean(false),
            word => TagPayload::String(word.to_string()),
        },
        names::BOOLEAN => TagPayload::Boolean(value.matched() == "true"),
        names::BYTE_ARRAY_OPEN => TagPayload::ByteArray(integer_elements(value, "byte array")?),
        names::INT_ARRAY_OPEN => TagPayload::IntArray(integer_elements(value, "int array")?),
        names::LONG_ARRAY_OPEN => TagPayload::LongArray(integer_elements(value, "long array")?),
        names::LIST_OPEN => {
            let mut tags = Vec::new();
            for entry in value.children() {
                if entry.group_name() == names::LIST_CLOSE {
                    break;
                }
                tags.push(tag_from_entry(entry)?);
            }
            let uniform = tags.windows(2).all(|pair| pair[0].kind() == pair[1].kind());
            match (tags.first().map(Tag::kind), uniform) {
                (Some(kind), true) => TagPayload::List(kind, tags),
                _ => TagPayload::GenericList(tags),
            }
        }
        names::COMPOUND_OPEN => {
            let mut tags = Vec::new();
            for entry in value.children() {
                if entry.group_name() == names::COMPOUND_CLOSE {
                    break;
                }
                tags.push(tag_from_entry(entry)?);
            }
            TagPayload::Compound(tags)
        }
        other => {
            return Err(CommandError::promotion(format!(
                "a '{}' token is not an NBT value",
                other
            )))
        }
    };
    Ok(Tag::new(name, payload))
}

/// Inspect the trailing type suffix of a number literal: `B`, `S`, `L`, `F`
/// and `D` (case-insensitive) pick the tag kind; without a suffix a decimal
/// point makes a double, anything else an int.
fn number_payload(literal: &str) -> Result<TagPayload, CommandError> {
    let invalid =
        || CommandError::promotion(format!("'{}' is not a valid number literal", literal));
    if let Some(suffix) = literal.chars().last().filter(char::is_ascii_alphabetic) {
        let body = &literal[..literal.len() - 1];
        return match suffix.to_ascii_lowercase() {
            'b' => body.parse::<i8>().map(TagPayload::Byte).map_err(|_| invalid()),
            'd' => body.parse::<f64>().map(TagPayload::Double).map_err(|_| invalid()),
            'f' => body.parse::<f32>().map(TagPayload::Float).map_err(|_| invalid()),
            'l' => body.parse::<i64>().map(TagPayload::Long).map_err(|_| invalid()),
            's' => body.parse::<i16>().map(TagPayload::Short).map_err(|_| invalid()),
            _ => Err(invalid()),
        };
    }
    if literal.contains('.') {
        literal
            .parse::<f64>()
            .map(TagPayload::Double)
            .map_err(|_| invalid())
    } else {
        literal
            .parse::<i32>()
            .map(TagPayload::Int)
            .map_err(|_| invalid())
    }
}

/// Parse the elements of a typed array token, excluding the closing
/// sentinel, as plain integers of the array's element type.
fn integer_elements<T: std::str::FromStr>(
    value: &Token,
    kind: &str,
) -> Result<Vec<T>, CommandError> {
    let entries = value
        .children()
        .split_last()
        .map_or(&[][..], |(_, elements)| elements);
    entries
        .iter()
        .map(|entry| {
            entry.matched().parse::<T>().map_err(|_| {
                CommandError::promotion(format!(
                    "'{}' is not a valid {} element",
                    entry.matched(),
                    kind
                ))
            })
        })
        .collect()
}

fn block_states_string(states: &[(String, String)]) -> String {
    if states.is_empty() {
        return String::new();
    }
    let entries: Vec<String> = states
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    format!("[{}]", entries.join(","))
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Parameter::Generic(keyword) => write!(f, "{}", keyword),
            Parameter::Raw(text) => write!(f, "{}", text),
            Parameter::Selector { kind, args } => {
                write!(f, "{}", kind.symbol())?;
                if !args.is_empty() {
                    let rendered: Vec<String> =
                        args.iter().map(|arg| format!("{}", arg)).collect();
                    write!(f, "[{}]", rendered.join(","))?;
                }
                Ok(())
            }
            Parameter::NamespacedId {
                namespace,
                name,
                block_states,
                nbt,
            } => {
                if let Some(namespace) = namespace {
                    write!(f, "{}:", namespace)?;
                }
                write!(f, "{}{}", name, block_states_string(block_states))?;
                if !nbt.is_empty() {
                    write!(f, "{}", nbt)?;
                }
                Ok(())
            }
            Parameter::Nbt(tag) => write!(f, "{}", tag),
            Parameter::Range(range) => write!(f, "{}", range),
            Parameter::Comment(text) => write!(f, "# {}", text),
            Parameter::Hybrid(parts) => {
                for part in parts {
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for SelectorArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let operator = if self.negated { "=!" } else { "=" };
        write!(f, "{}{}{}", self.name, operator, self.value)
    }
}

impl Display for ArgumentValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentValue::Raw(text) => write!(f, "{}", text),
            ArgumentValue::Nbt(tag) => write!(f, "{}", tag),
            ArgumentValue::Scores(scores) => {
                let entries: Vec<String> = scores
                    .iter()
                    .map(|(name, range)| format!("{}={}", name, range))
                    .collect();
                write!(f, "{{{}}}", entries.join(","))
            }
            ArgumentValue::Advancements(advancements) => {
                let entries: Vec<String> = advancements
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect();
                write!(f, "{{{}}}", entries.join(","))
            }
        }
    }
}

impl Display for AdvancementValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvancementValue::Done(done) => write!(f, "{}", done),
            AdvancementValue::Criteria(criteria) => {
                let entries: Vec<String> = criteria
                    .iter()
                    .map(|(name, done)| format!("{}={}", name, done))
                    .collect();
                write!(f, "{{{}}}", entries.join(","))
            }
        }
    }
}

impl Display for HybridPart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HybridPart::Nbt(tag) => write!(f, "{}", tag),
            HybridPart::BlockStates(states) => write!(f, "{}", block_states_string(states)),
            HybridPart::ListIndex(index) => write!(f, "[{}]", index),
            HybridPart::Raw(text) => write!(f, "{}", text),
        }
    }
}
