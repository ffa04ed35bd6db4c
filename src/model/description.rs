use super::{
    Group, GroupDef, ModelDescription, Operation, RegionDescription, StateDescription, StateRef,
    TemplateDescription, TransitionDescription,
};
use std::collections::HashMap;

impl GroupDef {
    pub fn new(name: &str, regex: &str) -> Self {
        Self {
            name: name.to_string(),
            regex: regex.to_string(),
        }
    }

    /// A definition whose pattern is the escaped alternation of literal
    /// keywords, as built by [Group::keyword].
    pub fn keyword(name: &str, keywords: &[&str]) -> Self {
        let group = Group::keyword(name, keywords);
        Self {
            name: name.to_string(),
            regex: group.regex().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }
}

impl StateRef {
    pub fn new(region: &str, state: &str) -> Self {
        Self {
            region: region.to_string(),
            state: state.to_string(),
        }
    }

    /// A reference into the containing region (`"this"`).
    pub fn local(state: &str) -> Self {
        Self::new("this", state)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

impl ModelDescription {
    pub fn new(start: StateRef) -> Self {
        Self {
            regions: HashMap::new(),
            templates: HashMap::new(),
            group_defs: Vec::new(),
            start,
        }
    }

    pub fn region(mut self, name: &str, region: RegionDescription) -> Self {
        self.regions.insert(name.to_string(), region);
        self
    }

    /// Add a model-level group definition, visible to every state unless
    /// shadowed by a narrower layer.
    pub fn define(mut self, def: GroupDef) -> Self {
        self.group_defs.push(def);
        self
    }

    /// Add a model-level template, referenceable from any region.
    pub fn template(mut self, name: &str, template: TemplateDescription) -> Self {
        self.templates.insert(name.to_string(), template);
        self
    }

    pub fn start(&self) -> &StateRef {
        &self.start
    }
}

impl RegionDescription {
    pub fn new(states: HashMap<String, StateDescription>) -> Self {
        Self {
            group_defs: Vec::new(),
            templates: HashMap::new(),
            states,
        }
    }

    pub fn state(mut self, name: &str, state: StateDescription) -> Self {
        self.states.insert(name.to_string(), state);
        self
    }

    pub fn define(mut self, def: GroupDef) -> Self {
        self.group_defs.push(def);
        self
    }

    /// Add a region-local template; it shadows a model-level template of the
    /// same name for states of this region.
    pub fn template(mut self, name: &str, template: TemplateDescription) -> Self {
        self.templates.insert(name.to_string(), template);
        self
    }
}

impl StateDescription {
    /// A state matching the given groups, in priority order. Group names are
    /// resolved against the layered vocabulary when the model is built.
    pub fn new(groups: &[&str]) -> Self {
        Self {
            template: None,
            group_defs: Vec::new(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            transitions: Vec::new(),
            tokenize: None,
        }
    }

    /// Reference a template whose groups and transitions are merged ahead of
    /// this state's own.
    pub fn template(mut self, name: &str) -> Self {
        self.template = Some(name.to_string());
        self
    }

    /// Add a state-level group definition; it shadows wider layers for this
    /// state only.
    pub fn define(mut self, def: GroupDef) -> Self {
        self.group_defs.push(def);
        self
    }

    pub fn transition(mut self, transition: TransitionDescription) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Whether the state emits tokens. Unset falls back to the template's
    /// flag, or `true`.
    pub fn tokenize(mut self, flag: bool) -> Self {
        self.tokenize = Some(flag);
        self
    }
}

impl TemplateDescription {
    pub fn new(groups: &[&str]) -> Self {
        Self {
            group_defs: Vec::new(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            transitions: Vec::new(),
            tokenize: None,
        }
    }

    pub fn define(mut self, def: GroupDef) -> Self {
        self.group_defs.push(def);
        self
    }

    pub fn transition(mut self, transition: TransitionDescription) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn tokenize(mut self, flag: bool) -> Self {
        self.tokenize = Some(flag);
        self
    }
}

impl TransitionDescription {
    /// Move to `target` when `group` matches; the stack is untouched.
    pub fn advance(group: &str, target: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            target: Some(target.to_string()),
            region: None,
            operation: Operation::None,
            value: None,
        }
    }

    /// Move to `target` whatever group matched.
    pub fn any(target: &str) -> Self {
        Self {
            group: None,
            target: Some(target.to_string()),
            region: None,
            operation: Operation::None,
            value: None,
        }
    }

    /// Apply `operation` when `group` matches, without a target of its own.
    /// POP resumes in the popped frame's state; END stops the parse.
    pub fn on(group: &str, operation: Operation) -> Self {
        Self {
            group: Some(group.to_string()),
            target: None,
            region: None,
            operation,
            value: None,
        }
    }

    /// Push a frame and continue at `target`. The frame's resumption state
    /// is set with [value](TransitionDescription::value) and defaults to the
    /// owning state.
    pub fn push(group: &str, target: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            target: Some(target.to_string()),
            region: None,
            operation: Operation::Push,
            value: None,
        }
    }

    /// Move to `target` when `group` matches and the guard state set with
    /// [value](TransitionDescription::value) is on top of the stack.
    pub fn peek(group: &str, target: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            target: Some(target.to_string()),
            region: None,
            operation: Operation::Peek,
            value: None,
        }
    }

    /// Pop the top frame when `group` matches.
    pub fn pop(group: &str) -> Self {
        Self::on(group, Operation::Pop)
    }

    /// Resolve the target state in the given region instead of `"this"`.
    pub fn in_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn value(mut self, value: StateRef) -> Self {
        self.value = Some(value);
        self
    }
}
