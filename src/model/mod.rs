//! A module consists of the automaton model driven by the [Parser](crate::Parser):
//! named terminal [groups](Group), [states](State) that alternate over them,
//! [transitions](Transition) carrying stack [operations](Operation), and the
//! immutable [Model] graph resolved from a declarative [ModelDescription].
//!
//! States are kept in an arena and referenced by [StateId], so cyclic state
//! graphs (loops back into the same state) need no shared-ownership
//! pointers. A [Model] is resolved on demand from the description's start
//! state: every state is memoized as soon as it is constructed, before its
//! transitions are populated, which lets transitions reference states that
//! are still being built.
//!
//! The group vocabulary is layered. Process-wide [predefined
//! groups](predefined_groups) are shadowed by model-level `group_defs`,
//! which are shadowed by region-level, template-level and finally
//! state-level definitions; each layer is scoped to the state being
//! resolved and does not leak into sibling states. Templates contribute
//! their groups and transitions ahead of the state's own, and their
//! `tokenize` flag applies only when the state does not set one.

mod builder;
mod description;
mod group;
mod state;
mod transition;

#[cfg(test)]
mod __tests__;

use fancy_regex::Regex;
use std::collections::HashMap;

pub use group::predefined_groups;

/// A named terminal pattern matched by a [State].
///
/// Built either from an arbitrary pattern ([Group::generic]) or from an
/// alternation of literal keywords ([Group::keyword]). The pattern never
/// anchors itself; the state's compound pattern anchors every group at the
/// current cursor. Within one state, group names double as the named-capture
/// identifiers of the compound pattern and must be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    regex: String,
}

/// An index into the [Model]'s state arena.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

/// The stack operation attached to a [Transition].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Take the transition; the stack is untouched.
    None,
    /// Push a frame carrying the transition's value state and the token that
    /// was just matched; child accumulation starts over inside the frame.
    Push,
    /// Guard: the transition applies only while the transition's value state
    /// is on top of the stack.
    Peek,
    /// Pop the top frame, attach the accumulated children to the frame's
    /// token and resume in the frame's state.
    Pop,
    /// Terminate tokenization successfully.
    End,
}

/// An edge out of a [State], labeled by a matched group name (`None` matches
/// any group), carrying an [Operation] and an optional target state.
#[derive(Debug, Clone)]
pub struct Transition {
    group: Option<String>,
    target: Option<StateId>,
    operation: Operation,
    value: StateId,
}

/// A choice among ordered [groups](Group) plus ordered outgoing
/// [transitions](Transition).
///
/// The compound pattern is compiled once at model build time as the anchored
/// alternation of the state's groups, each wrapped in a named capture. A
/// state with `tokenize == false` matches input but emits no tokens.
#[derive(Debug)]
pub struct State {
    groups: Vec<Group>,
    transitions: Vec<Transition>,
    tokenize: bool,
    pattern: Regex,
}

/// The immutable automaton graph: an arena of [states](State) indexed by
/// region and state name, plus the start state.
///
/// A model is built once from a [ModelDescription] (or a JSON record via
/// [Model::from_json]) and never mutated afterwards; it may be shared freely
/// by any number of parsers.
#[derive(Debug)]
pub struct Model {
    states: Vec<State>,
    regions: HashMap<String, HashMap<String, StateId>>,
    start: StateId,
}

/// A transition as resolved against the current stack: POP rewrites the
/// target to the state stored in the top frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedTransition {
    pub(crate) operation: Operation,
    pub(crate) target: Option<StateId>,
    pub(crate) value: StateId,
}

/// A successful anchored match of a state's compound pattern.
#[derive(Debug)]
pub(crate) struct StateMatch<'m> {
    /// Length of the whole match; the cursor advances by this many bytes.
    pub(crate) length: usize,
    /// The first group, in declaration order, whose named capture
    /// participated in the match.
    pub(crate) group: &'m Group,
    /// The text captured by that group.
    pub(crate) text: String,
}

/// The declarative record a [Model] is resolved from.
///
/// Mirrors the recognized fields of the on-disk description: `regions`,
/// model-level `templates` and `group_defs`, and the `start` reference.
#[derive(Debug, Clone, Default)]
pub struct ModelDescription {
    regions: HashMap<String, RegionDescription>,
    templates: HashMap<String, TemplateDescription>,
    group_defs: Vec<GroupDef>,
    start: StateRef,
}

/// A named namespace of states, with optional region-local group
/// definitions and templates.
#[derive(Debug, Clone, Default)]
pub struct RegionDescription {
    group_defs: Vec<GroupDef>,
    templates: HashMap<String, TemplateDescription>,
    states: HashMap<String, StateDescription>,
}

/// The description of a single state: ordered group names, transitions, an
/// optional template reference and an optional `tokenize` flag.
#[derive(Debug, Clone, Default)]
pub struct StateDescription {
    template: Option<String>,
    group_defs: Vec<GroupDef>,
    groups: Vec<String>,
    transitions: Vec<TransitionDescription>,
    tokenize: Option<bool>,
}

/// A reusable state fragment; its groups, transitions and group definitions
/// are merged ahead of the referencing state's own.
#[derive(Debug, Clone, Default)]
pub struct TemplateDescription {
    group_defs: Vec<GroupDef>,
    groups: Vec<String>,
    transitions: Vec<TransitionDescription>,
    tokenize: Option<bool>,
}

/// A named pattern definition contributed to the vocabulary layer it is
/// declared in.
#[derive(Debug, Clone)]
pub struct GroupDef {
    name: String,
    regex: String,
}

/// A `(region, state)` reference. The region `"this"` resolves to the
/// region containing the reference.
#[derive(Debug, Clone, Default)]
pub struct StateRef {
    region: String,
    state: String,
}

/// The description of a transition: an optional group name (absent means
/// any group), an optional target state (looked up in the `region` field,
/// `"this"` by default), an [Operation] and an optional value reference.
#[derive(Debug, Clone)]
pub struct TransitionDescription {
    group: Option<String>,
    target: Option<String>,
    region: Option<String>,
    operation: Operation,
    value: Option<StateRef>,
}
