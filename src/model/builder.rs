use super::{
    predefined_groups, Group, GroupDef, Model, ModelDescription, Operation, RegionDescription,
    State, StateDescription, StateId, StateRef, TemplateDescription, Transition,
    TransitionDescription,
};
use crate::ModelError;
use serde_json::Value;
use std::collections::HashMap;

impl Model {
    /// Resolve a model from its declarative description.
    ///
    /// States are resolved on demand starting from the start state; every
    /// state reachable through transition targets and push values ends up in
    /// the arena. Unreferenced description entries are simply never built.
    pub fn from_description(description: &ModelDescription) -> Result<Self, ModelError> {
        let mut resolver = Resolver {
            description,
            states: Vec::new(),
            index: HashMap::new(),
        };
        let start =
            resolver.resolve_state(description.start.region(), description.start.state())?;

        let mut regions: HashMap<String, HashMap<String, StateId>> = HashMap::new();
        for ((region, name), id) in resolver.index {
            regions.entry(region).or_default().insert(name, id);
        }
        Ok(Model {
            states: resolver.states,
            regions,
            start,
        })
    }

    /// Resolve a model from the JSON form of the description record, the
    /// shape the description is stored in on disk.
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let description = description_from_json(value)?;
        Model::from_description(&description)
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// Look up a state of the arena. The id must come from this model.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn find_state(&self, region: &str, name: &str) -> Option<StateId> {
        self.regions.get(region)?.get(name).copied()
    }

    /// The resolved `(region, state)` index.
    pub fn regions(&self) -> &HashMap<String, HashMap<String, StateId>> {
        &self.regions
    }
}

struct Resolver<'d> {
    description: &'d ModelDescription,
    states: Vec<State>,
    index: HashMap<(String, String), StateId>,
}

impl<'d> Resolver<'d> {
    fn resolve_state(&mut self, region: &str, name: &str) -> Result<StateId, ModelError> {
        if let Some(id) = self.index.get(&(region.to_string(), name.to_string())) {
            return Ok(*id);
        }

        let description = self.description;
        let region_data = description.regions.get(region).ok_or_else(|| {
            ModelError::new(
                format!("region '{}'", region),
                "the referenced region is not defined in the description".to_string(),
            )
        })?;
        let state_data = region_data.states.get(name).ok_or_else(|| {
            ModelError::new(
                format!("state '{}.{}'", region, name),
                "the referenced state is not defined in its region".to_string(),
            )
        })?;
        let template = resolve_template(description, region_data, state_data, region, name)?;

        // The vocabulary visible to this state: predefined groups shadowed by
        // model, region, template and state level definitions, in that order.
        let layers = Layers {
            model: &description.group_defs,
            region: &region_data.group_defs,
            template: template.map_or(&[][..], |t| t.group_defs.as_slice()),
            state: &state_data.group_defs,
        };

        let template_groups = template.map_or(&[][..], |t| t.groups.as_slice());
        let mut groups = Vec::with_capacity(template_groups.len() + state_data.groups.len());
        for group_name in template_groups.iter().chain(state_data.groups.iter()) {
            let group = layers.lookup(group_name).ok_or_else(|| {
                ModelError::new(
                    format!("group '{}'", group_name),
                    format!("no definition is visible from state '{}.{}'", region, name),
                )
            })?;
            groups.push(group);
        }

        let tokenize = state_data
            .tokenize
            .or(template.and_then(|t| t.tokenize))
            .unwrap_or(true);

        // Memoize before transitions are resolved so cyclic references find
        // the state already in the arena.
        let id = StateId(self.states.len());
        self.states.push(State::compile(groups, tokenize)?);
        self.index
            .insert((region.to_string(), name.to_string()), id);

        let template_transitions = template.map_or(&[][..], |t| t.transitions.as_slice());
        let mut transitions = Vec::new();
        for td in template_transitions.iter().chain(state_data.transitions.iter()) {
            transitions.push(self.resolve_transition(td, &layers, region, name, id)?);
        }
        self.states[id.0].set_transitions(transitions);

        Ok(id)
    }

    fn resolve_transition(
        &mut self,
        td: &TransitionDescription,
        layers: &Layers<'_>,
        region: &str,
        state_name: &str,
        this: StateId,
    ) -> Result<Transition, ModelError> {
        if let Some(group_name) = &td.group {
            if layers.lookup(group_name).is_none() {
                return Err(ModelError::new(
                    format!("group '{}'", group_name),
                    format!(
                        "a transition of state '{}.{}' references a group with no visible definition",
                        region, state_name
                    ),
                ));
            }
        }

        let target_region = resolve_region_name(td.region.as_deref(), region);
        let target = match &td.target {
            Some(target_name) => Some(self.resolve_state(target_region, target_name)?),
            None => match td.operation {
                Operation::Pop | Operation::End => None,
                _ => {
                    return Err(ModelError::new(
                        format!("state '{}.{}'", region, state_name),
                        format!(
                            "a '{}' transition requires a target state",
                            td.operation
                        ),
                    ))
                }
            },
        };

        let value = match &td.value {
            Some(value_ref) => {
                let value_region = resolve_region_name(Some(value_ref.region()), region);
                self.resolve_state(value_region, value_ref.state())?
            }
            None => this,
        };

        Ok(Transition::new(td.group.clone(), target, td.operation, value))
    }
}

fn resolve_template<'d>(
    description: &'d ModelDescription,
    region_data: &'d RegionDescription,
    state_data: &'d StateDescription,
    region: &str,
    name: &str,
) -> Result<Option<&'d TemplateDescription>, ModelError> {
    match &state_data.template {
        Some(template_name) => region_data
            .templates
            .get(template_name)
            .or_else(|| description.templates.get(template_name))
            .map(Some)
            .ok_or_else(|| {
                ModelError::new(
                    format!("template '{}'", template_name),
                    format!("no template is visible from state '{}.{}'", region, name),
                )
            }),
        None => Ok(None),
    }
}

/// The group definition layers visible while one state is being resolved.
struct Layers<'d> {
    model: &'d [GroupDef],
    region: &'d [GroupDef],
    template: &'d [GroupDef],
    state: &'d [GroupDef],
}

impl Layers<'_> {
    /// Find the strongest visible definition for a group name. Within one
    /// layer a later definition of the same name wins, as a redefinition
    /// would in the description record.
    fn lookup(&self, name: &str) -> Option<Group> {
        let from_defs = |defs: &[GroupDef]| {
            defs.iter()
                .rev()
                .find(|d| d.name() == name)
                .map(|d| Group::generic(d.name(), d.regex()))
        };
        from_defs(self.state)
            .or_else(|| from_defs(self.template))
            .or_else(|| from_defs(self.region))
            .or_else(|| from_defs(self.model))
            .or_else(|| predefined_groups().into_iter().find(|g| g.name() == name))
    }
}

fn resolve_region_name<'a>(region: Option<&'a str>, this_region: &'a str) -> &'a str {
    match region {
        Some("this") | None => this_region,
        Some(other) => other,
    }
}

fn description_from_json(value: &Value) -> Result<ModelDescription, ModelError> {
    let start = value.get("start").ok_or_else(|| {
        ModelError::new(
            "start".to_string(),
            "the description requires a start reference".to_string(),
        )
    })?;
    let mut description = ModelDescription::new(StateRef::new(
        required_str(start, "region", "start")?,
        required_str(start, "state", "start")?,
    ));

    for def in group_defs_from_json(value, "model")? {
        description = description.define(def);
    }
    if let Some(templates) = value.get("templates") {
        for (name, template) in object_entries(templates, "templates")? {
            description = description.template(name, template_from_json(template, name)?);
        }
    }
    let regions = value.get("regions").ok_or_else(|| {
        ModelError::new(
            "regions".to_string(),
            "the description requires a regions map".to_string(),
        )
    })?;
    for (name, region) in object_entries(regions, "regions")? {
        description = description.region(name, region_from_json(region, name)?);
    }
    Ok(description)
}

fn region_from_json(value: &Value, name: &str) -> Result<RegionDescription, ModelError> {
    let mut region = RegionDescription::default();
    for def in group_defs_from_json(value, name)? {
        region = region.define(def);
    }
    if let Some(templates) = value.get("templates") {
        for (template_name, template) in object_entries(templates, name)? {
            region = region.template(template_name, template_from_json(template, template_name)?);
        }
    }
    let states = value.get("states").ok_or_else(|| {
        ModelError::new(
            format!("region '{}'", name),
            "a region requires a states map".to_string(),
        )
    })?;
    for (state_name, state) in object_entries(states, name)? {
        region = region.state(state_name, state_from_json(state, state_name)?);
    }
    Ok(region)
}

fn state_from_json(value: &Value, name: &str) -> Result<StateDescription, ModelError> {
    let groups = string_list(value.get("groups"), name)?;
    let group_refs: Vec<&str> = groups.iter().map(String::as_str).collect();
    let mut state = StateDescription::new(&group_refs);
    if let Some(template) = value.get("template").and_then(Value::as_str) {
        state = state.template(template);
    }
    for def in group_defs_from_json(value, name)? {
        state = state.define(def);
    }
    if let Some(flag) = value.get("tokenize").and_then(Value::as_bool) {
        state = state.tokenize(flag);
    }
    if let Some(transitions) = value.get("transitions").and_then(Value::as_array) {
        for transition in transitions {
            state = state.transition(transition_from_json(transition, name)?);
        }
    }
    Ok(state)
}

fn template_from_json(value: &Value, name: &str) -> Result<TemplateDescription, ModelError> {
    let groups = string_list(value.get("groups"), name)?;
    let group_refs: Vec<&str> = groups.iter().map(String::as_str).collect();
    let mut template = TemplateDescription::new(&group_refs);
    for def in group_defs_from_json(value, name)? {
        template = template.define(def);
    }
    if let Some(flag) = value.get("tokenize").and_then(Value::as_bool) {
        template = template.tokenize(flag);
    }
    if let Some(transitions) = value.get("transitions").and_then(Value::as_array) {
        for transition in transitions {
            template = template.transition(transition_from_json(transition, name)?);
        }
    }
    Ok(template)
}

fn transition_from_json(value: &Value, state: &str) -> Result<TransitionDescription, ModelError> {
    let operation_name = value
        .get("operation")
        .and_then(Value::as_str)
        .unwrap_or("none");
    let operation = Operation::from_name(operation_name).ok_or_else(|| {
        ModelError::new(
            format!("state '{}'", state),
            format!("unknown transition operation '{}'", operation_name),
        )
    })?;

    let mut transition = match value.get("group").and_then(Value::as_str) {
        Some(group) => TransitionDescription::on(group, operation),
        None => TransitionDescription {
            group: None,
            target: None,
            region: None,
            operation,
            value: None,
        },
    };
    transition.target = value
        .get("target")
        .and_then(Value::as_str)
        .map(str::to_string);
    transition.region = value
        .get("region")
        .and_then(Value::as_str)
        .map(str::to_string);
    if let Some(value_ref) = value.get("value") {
        let region = value_ref.get("region").and_then(Value::as_str).unwrap_or("this");
        transition = transition.value(StateRef::new(
            region,
            required_str(value_ref, "state", state)?,
        ));
    }
    Ok(transition)
}

fn group_defs_from_json(value: &Value, owner: &str) -> Result<Vec<GroupDef>, ModelError> {
    let mut defs = Vec::new();
    if let Some(entries) = value.get("group_defs").and_then(Value::as_array) {
        for entry in entries {
            defs.push(GroupDef::new(
                required_str(entry, "name", owner)?,
                required_str(entry, "regex", owner)?,
            ));
        }
    }
    Ok(defs)
}

fn required_str<'v>(value: &'v Value, field: &str, owner: &str) -> Result<&'v str, ModelError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ModelError::new(
                format!("'{}'", owner),
                format!("a string field '{}' is required", field),
            )
        })
}

fn object_entries<'v>(
    value: &'v Value,
    owner: &str,
) -> Result<Vec<(&'v str, &'v Value)>, ModelError> {
    value
        .as_object()
        .map(|map| map.iter().map(|(k, v)| (k.as_str(), v)).collect())
        .ok_or_else(|| {
            ModelError::new(
                format!("'{}'", owner),
                "expected a JSON object".to_string(),
            )
        })
}

fn string_list(value: Option<&Value>, owner: &str) -> Result<Vec<String>, ModelError> {
    match value {
        None => Ok(Vec::new()),
        Some(list) => list
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .ok_or_else(|| {
                ModelError::new(
                    format!("'{}'", owner),
                    "expected a JSON array of group names".to_string(),
                )
            }),
    }
}
