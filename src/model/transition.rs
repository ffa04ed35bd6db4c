use super::{Operation, StateId, Transition};
use std::fmt::{Display, Formatter};

impl Operation {
    /// Parse the description form of an operation (`"none"`, `"push"`,
    /// `"peek"`, `"pop"`, `"end"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Operation::None),
            "push" => Some(Operation::Push),
            "peek" => Some(Operation::Peek),
            "pop" => Some(Operation::Pop),
            "end" => Some(Operation::End),
            _ => None,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::None => "none",
            Operation::Push => "push",
            Operation::Peek => "peek",
            Operation::Pop => "pop",
            Operation::End => "end",
        };
        write!(f, "{}", name)
    }
}

impl Transition {
    pub(crate) fn new(
        group: Option<String>,
        target: Option<StateId>,
        operation: Operation,
        value: StateId,
    ) -> Self {
        Self {
            group,
            target,
            operation,
            value,
        }
    }

    /// The group name this transition fires on; `None` matches any group.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn target(&self) -> Option<StateId> {
        self.target
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The associated state: the pushed frame's resumption state for PUSH,
    /// the guard state for PEEK. Defaults to the owning state.
    pub fn value(&self) -> StateId {
        self.value
    }
}
