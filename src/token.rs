use crate::model::Group;
use crate::Token;
use ptree::TreeItem;
use std::fmt::{Display, Formatter};

impl<'m> Token<'m> {
    pub fn new(matched: String, group: &'m Group, children: Vec<Token<'m>>) -> Self {
        Self {
            matched,
            group,
            children,
        }
    }

    /// The verbatim matched text.
    pub fn matched(&self) -> &str {
        &self.matched
    }

    /// The group that matched this token.
    pub fn group(&self) -> &'m Group {
        self.group
    }

    pub fn group_name(&self) -> &'m str {
        self.group.name()
    }

    /// Child tokens, in the order they were consumed between this token's
    /// push and the matching pop.
    pub fn children(&self) -> &[Token<'m>] {
        &self.children
    }

    pub(crate) fn push_children(&mut self, children: Vec<Token<'m>>) {
        self.children.extend(children);
    }

    /// The first direct child matched by the named group.
    pub fn get_child(&self, group_name: &str) -> Option<&Token<'m>> {
        self.children
            .iter()
            .find(|child| child.group_name() == group_name)
    }

    /// Whether this token or any nested child was matched by the named group.
    pub fn contains(&self, group_name: &str) -> bool {
        self.group_name() == group_name
            || self.children.iter().any(|child| child.contains(group_name))
    }

    /// Search through all nested children and return the first matching token.
    pub fn find_token<TF: Fn(&Token<'m>) -> bool>(&self, p: &TF) -> Option<&Token<'m>> {
        if p(self) {
            Some(self)
        } else {
            self.children.iter().find_map(|child| child.find_token(p))
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}", self.group_name(), self.matched)?;
        if !self.children.is_empty() {
            let children: Vec<String> = self.children.iter().map(|t| format!("{}", t)).collect();
            write!(f, ", [{}]", children.join(", "))?;
        }
        write!(f, ")")
    }
}

impl<'m> TreeItem for Token<'m> {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        write!(f, "{} # {:?}", self.group_name(), self.matched)
    }

    fn children(&self) -> std::borrow::Cow<[Self::Child]> {
        std::borrow::Cow::from(&self.children)
    }
}

impl Token<'_> {
    pub fn print(&self) -> Result<(), std::io::Error> {
        ptree::print_tree(self)
    }
}
