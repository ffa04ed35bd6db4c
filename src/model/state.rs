use super::{Group, Operation, ResolvedTransition, State, StateId, StateMatch, Transition};
use crate::ModelError;
use fancy_regex::Regex;

impl State {
    /// Compile the state's compound pattern: the anchored alternation of the
    /// groups, each wrapped in a named capture under the group's name.
    ///
    /// Transitions are attached afterwards by the model builder, once their
    /// target states have been resolved.
    pub(crate) fn compile(groups: Vec<Group>, tokenize: bool) -> Result<Self, ModelError> {
        let alternation = groups
            .iter()
            .map(|g| format!("(?P<{}>{})", g.name(), g.regex()))
            .collect::<Vec<String>>()
            .join("|");
        let pattern = Regex::new(&format!("^(?:{})", alternation)).map_err(|err| {
            ModelError::new(
                format!("state pattern /{}/", alternation),
                format!("group patterns should compile to a valid regex expression. {}", err),
            )
        })?;
        Ok(Self {
            groups,
            transitions: Vec::new(),
            tokenize,
            pattern,
        })
    }

    pub(crate) fn set_transitions(&mut self, transitions: Vec<Transition>) {
        self.transitions = transitions;
    }

    /// The groups matched at this state, in priority order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Whether the state emits tokens for its matches.
    pub fn tokenize(&self) -> bool {
        self.tokenize
    }

    /// Match the compound pattern at the start of `input`.
    ///
    /// The matched group is the first group in declaration order whose named
    /// capture participated; the cursor advances by the length of the whole
    /// match, while the token text is the capture's text.
    pub(crate) fn match_at(&self, input: &str) -> Option<StateMatch<'_>> {
        let captures = self.pattern.captures(input).ok()??;
        let length = captures.get(0)?.end();
        let group = self
            .groups
            .iter()
            .find(|g| captures.name(g.name()).is_some())?;
        let text = captures.name(group.name())?.as_str().to_string();
        Some(StateMatch {
            length,
            group,
            text,
        })
    }

    /// Resolve the transition for a matched group against the current stack.
    ///
    /// Transitions are tried in declaration order. A PEEK transition is
    /// skipped unless its value state is on top of the stack; a POP
    /// transition is rewritten so its target is the top frame's state. When
    /// no transition applies the state loops back onto itself without
    /// touching the stack.
    pub(crate) fn find_transition(
        &self,
        matched: &Group,
        stack_top: Option<StateId>,
        this: StateId,
    ) -> Option<ResolvedTransition> {
        for transition in &self.transitions {
            if transition.operation == Operation::Peek && stack_top != Some(transition.value) {
                continue;
            }
            let applies = match transition.group() {
                Some(name) => name == matched.name(),
                None => true,
            };
            if !applies {
                continue;
            }
            if transition.operation == Operation::Pop {
                match stack_top {
                    Some(top) => {
                        return Some(ResolvedTransition {
                            operation: Operation::Pop,
                            target: Some(top),
                            value: transition.value,
                        })
                    }
                    None => continue,
                }
            }
            return Some(ResolvedTransition {
                operation: transition.operation,
                target: transition.target,
                value: transition.value,
            });
        }
        Some(ResolvedTransition {
            operation: Operation::None,
            target: Some(this),
            value: this,
        })
    }
}
