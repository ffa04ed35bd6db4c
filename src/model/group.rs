use super::Group;
use std::fmt::{Display, Formatter};

impl Group {
    /// Create a group from an arbitrary pattern.
    ///
    /// The pattern should not anchor itself; the owning state anchors every
    /// group at the current cursor position.
    pub fn generic(name: &str, regex: &str) -> Self {
        Self {
            name: name.to_string(),
            regex: regex.to_string(),
        }
    }

    /// Create a group that matches any one of the given literal keywords.
    ///
    /// The pattern is the alternation of the keywords; a `|` inside a
    /// keyword is escaped so it cannot split the alternation.
    pub fn keyword(name: &str, keywords: &[&str]) -> Self {
        let regex = keywords
            .iter()
            .map(|k| k.replace('|', r"\|"))
            .collect::<Vec<String>>()
            .join("|");
        Self {
            name: name.to_string(),
            regex,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The process-wide predefined vocabulary, available to every state unless
/// shadowed by a model, region, template or state level definition.
pub fn predefined_groups() -> Vec<Group> {
    vec![
        // Anything except whitespace.
        Group::generic("Generic", r"[^\s]+"),
        Group::generic("Integer", r"-?\d+"),
        Group::generic("Float", r"\d*\.\d+"),
        // A bounded or half-open integer range such as `1..3`, `1..`, `..3`.
        Group::generic("Range", r"-?\d+\.{2}(?:-?\d+)?|(?:-?\d+)?\.{2}-?\d+"),
        // A decimal that may carry tilde or caret notation, or a bare `~`/`^`.
        Group::generic("RelativeFloat", r"[~\^]?\d*\.?\d+|[~\^]"),
        // A decimal with an optional literal type suffix, as in `1b` or `2.5F`.
        Group::generic("Number", r"-?\d*\.?\d+[BbDdFfLlSs]?"),
        Group::generic("Word", r"\w+"),
        Group::generic("String", r#""(?:\\.|[^"])*"|'(?:\\.|[^'])*'"#),
        Group::generic("Selector", r"@[aeprs]"),
    ]
}
