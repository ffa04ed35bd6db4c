use crate::model::{
    GroupDef, ModelDescription, Operation, RegionDescription, StateDescription, StateRef,
    TemplateDescription, TransitionDescription,
};

/// Group names shared between the grammar description and the promoter.
///
/// The promoter dispatches on these names, so they are the contract between
/// the declarative grammar and the typed parameters it promotes into.
pub mod names {
    pub const EOL: &str = "EOL";
    pub const COMMENT: &str = "Comment";
    pub const KEYWORD: &str = "Keyword";
    pub const SELECTOR_PARAMETER: &str = "SelectorParameter";
    pub const NAMESPACED_ID: &str = "NamespacedID";
    pub const HYBRID_PARAMETER: &str = "HybridParameter";
    pub const HYBRID_END: &str = "HybridEnd";
    pub const RANGE: &str = "Range";
    pub const NUMBER: &str = "Number";
    pub const STRING: &str = "String";
    pub const WORD: &str = "Word";
    pub const BOOLEAN: &str = "Boolean";
    pub const NEGATION: &str = "Negation";
    pub const SELECTOR_ARGUMENT: &str = "SelectorArgument";
    pub const SCORES_ARGUMENT: &str = "ScoresArgument";
    pub const NBT_ARGUMENT: &str = "NBTArgument";
    pub const ADVANCEMENTS_ARGUMENT: &str = "AdvancementsArgument";
    pub const SELECTOR_CLOSE: &str = "SelectorClose";
    pub const SCORES_CLOSE: &str = "ScoresClose";
    pub const ADVANCEMENTS_CLOSE: &str = "AdvancementsClose";
    pub const CRITERIA_OPEN: &str = "CriteriaOpen";
    pub const CRITERIA_CLOSE: &str = "CriteriaClose";
    pub const COMPOUND_OPEN: &str = "CompoundOpen";
    pub const COMPOUND_CLOSE: &str = "CompoundClose";
    pub const LIST_OPEN: &str = "ListOpen";
    pub const LIST_CLOSE: &str = "ListClose";
    pub const BYTE_ARRAY_OPEN: &str = "ByteArrayOpen";
    pub const INT_ARRAY_OPEN: &str = "IntArrayOpen";
    pub const LONG_ARRAY_OPEN: &str = "LongArrayOpen";
    pub const LIST_INDEX_OPEN: &str = "ListIndexOpen";
    pub const BLOCK_STATES_OPEN: &str = "BlockStatesOpen";
    pub const BLOCK_STATES_END: &str = "BlockStatesEnd";
}

/// The declarative grammar of vanilla commands.
///
/// Four regions: `commands` dispatches between comments, keywords and the
/// structured parameter kinds; `selector` parses bracketed selector argument
/// lists with their scores/advancements/criteria dictionaries; `nbt` parses
/// SNBT compounds, lists and typed arrays; `blockstates` parses `[k=v,…]`
/// maps. Every dictionary-shaped construct closes through the shared
/// `entry_tail` template, with the separator and close patterns late-bound
/// per state.
pub fn command_model() -> ModelDescription {
    ModelDescription::new(StateRef::new("commands", "Command"))
        .define(GroupDef::new(names::EOL, r"$"))
        .define(GroupDef::new(
            names::NAMESPACED_ID,
            r"[a-z0-9_.\-]+:[a-z0-9_.\-/]+",
        ))
        .define(GroupDef::new(names::KEYWORD, r"[A-Za-z_][A-Za-z_\-]*(?=\s|$)"))
        .define(GroupDef::keyword(names::BOOLEAN, &["true", "false"]))
        .define(GroupDef::new(names::NEGATION, "!"))
        .define(GroupDef::new("Equals", "="))
        .template(
            "entry_tail",
            TemplateDescription::new(&["EntrySeparator", "EntryClose", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::pop("EntrySeparator"))
                .transition(TransitionDescription::pop("EntryClose"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .region("commands", commands_region())
        .region("selector", selector_region())
        .region("nbt", nbt_region())
        .region("blockstates", blockstates_region())
}

fn commands_region() -> RegionDescription {
    RegionDescription::default()
        .define(GroupDef::new("CommentMark", "#"))
        .define(GroupDef::new("Slash", "/"))
        .define(GroupDef::new("Space", r"\s+"))
        .define(GroupDef::new("Begin", r"(?=\S)"))
        .state(
            "Command",
            StateDescription::new(&["CommentMark", "Slash", "Space", names::EOL, "Begin"])
                .tokenize(false)
                .transition(TransitionDescription::advance("CommentMark", "CommentBody"))
                .transition(TransitionDescription::advance("Slash", "Param"))
                .transition(TransitionDescription::on(names::EOL, Operation::End))
                .transition(TransitionDescription::advance("Begin", "Param")),
        )
        .state(
            "CommentBody",
            StateDescription::new(&[names::COMMENT])
                .define(GroupDef::new(names::COMMENT, ".*"))
                .transition(TransitionDescription::on(names::COMMENT, Operation::End)),
        )
        .state(
            "Param",
            StateDescription::new(&[
                names::EOL,
                names::SELECTOR_PARAMETER,
                names::NAMESPACED_ID,
                names::HYBRID_PARAMETER,
                names::RANGE,
                names::STRING,
                names::KEYWORD,
                "RelativeFloat",
                "Generic",
            ])
            .define(GroupDef::new(names::SELECTOR_PARAMETER, "@[aeprs]"))
            .define(GroupDef::new(names::HYBRID_PARAMETER, r"(?=[{\[])"))
            .transition(TransitionDescription::on(names::EOL, Operation::End))
            .transition(
                TransitionDescription::push(names::SELECTOR_PARAMETER, "ArgListStart")
                    .in_region("selector")
                    .value(StateRef::new("commands", "Spacing")),
            )
            .transition(
                TransitionDescription::push(names::NAMESPACED_ID, "NamespacedIDBody")
                    .value(StateRef::local("Spacing")),
            )
            .transition(
                TransitionDescription::push(names::HYBRID_PARAMETER, "HybridBody")
                    .value(StateRef::local("Spacing")),
            )
            .transition(TransitionDescription::any("Spacing")),
        )
        .state(
            "Spacing",
            StateDescription::new(&["Space", names::EOL, "Begin"])
                .tokenize(false)
                .transition(TransitionDescription::advance("Space", "Param"))
                .transition(TransitionDescription::on(names::EOL, Operation::End))
                .transition(TransitionDescription::advance("Begin", "Param")),
        )
        .state(
            "NamespacedIDBody",
            StateDescription::new(&[names::BLOCK_STATES_OPEN, names::COMPOUND_OPEN, "IDEnd"])
                .define(GroupDef::new(names::BLOCK_STATES_OPEN, r"\["))
                .define(GroupDef::new(names::COMPOUND_OPEN, r"\{"))
                .define(GroupDef::new("IDEnd", r"(?=\s)|$"))
                .transition(
                    TransitionDescription::push(names::BLOCK_STATES_OPEN, "StateEntry")
                        .in_region("blockstates")
                        .value(StateRef::local("NamespacedIDBody")),
                )
                .transition(
                    TransitionDescription::push(names::COMPOUND_OPEN, "CompoundEntry")
                        .in_region("nbt")
                        .value(StateRef::local("NamespacedIDBody")),
                )
                .transition(TransitionDescription::pop("IDEnd")),
        )
        .state(
            "HybridBody",
            StateDescription::new(&[
                names::COMPOUND_OPEN,
                names::LIST_INDEX_OPEN,
                names::BLOCK_STATES_OPEN,
                names::LIST_OPEN,
                "HybridRaw",
                names::HYBRID_END,
            ])
            .define(GroupDef::new(names::COMPOUND_OPEN, r"\{"))
            .define(GroupDef::new(names::LIST_INDEX_OPEN, r"\[(?=-?\d+\])"))
            .define(GroupDef::new(names::BLOCK_STATES_OPEN, r"\[(?=[A-Za-z_]\w*=)"))
            .define(GroupDef::new(names::LIST_OPEN, r"\["))
            .define(GroupDef::new("HybridRaw", r"[^\s{}\[\]]+"))
            .define(GroupDef::new(names::HYBRID_END, r"(?=\s)|$"))
            .transition(
                TransitionDescription::push(names::COMPOUND_OPEN, "CompoundEntry")
                    .in_region("nbt")
                    .value(StateRef::local("HybridBody")),
            )
            .transition(
                TransitionDescription::push(names::LIST_INDEX_OPEN, "IndexValue")
                    .value(StateRef::local("HybridBody")),
            )
            .transition(
                TransitionDescription::push(names::BLOCK_STATES_OPEN, "StateEntry")
                    .in_region("blockstates")
                    .value(StateRef::local("HybridBody")),
            )
            .transition(
                TransitionDescription::push(names::LIST_OPEN, "ListEntry")
                    .in_region("nbt")
                    .value(StateRef::local("HybridBody")),
            )
            .transition(TransitionDescription::pop(names::HYBRID_END)),
        )
        .state(
            "IndexValue",
            StateDescription::new(&["Integer", names::EOL])
                .transition(TransitionDescription::advance("Integer", "IndexEnd"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "IndexEnd",
            StateDescription::new(&["IndexClose", names::EOL])
                .tokenize(false)
                .define(GroupDef::new("IndexClose", r"\]"))
                .transition(TransitionDescription::pop("IndexClose"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
}

fn selector_region() -> RegionDescription {
    RegionDescription::default()
        .state(
            "ArgListStart",
            StateDescription::new(&["SelectorOpen", "SelectorEnd"])
                .tokenize(false)
                .define(GroupDef::new("SelectorOpen", r"\["))
                .define(GroupDef::new("SelectorEnd", r"(?=\s)|$"))
                .transition(TransitionDescription::advance("SelectorOpen", "ArgName"))
                .transition(TransitionDescription::pop("SelectorEnd")),
        )
        .state(
            "ArgName",
            StateDescription::new(&[
                names::SCORES_ARGUMENT,
                names::NBT_ARGUMENT,
                names::ADVANCEMENTS_ARGUMENT,
                names::SELECTOR_ARGUMENT,
                names::SELECTOR_CLOSE,
                names::EOL,
            ])
            .define(GroupDef::new(names::SCORES_ARGUMENT, r"scores\b"))
            .define(GroupDef::new(names::NBT_ARGUMENT, r"nbt\b"))
            .define(GroupDef::new(names::ADVANCEMENTS_ARGUMENT, r"advancements\b"))
            .define(GroupDef::new(names::SELECTOR_ARGUMENT, r"[A-Za-z_][\w.\-]*"))
            .define(GroupDef::new(names::SELECTOR_CLOSE, r"\]"))
            .transition(
                TransitionDescription::push(names::SCORES_ARGUMENT, "ScoresEquals")
                    .value(StateRef::local("ArgName")),
            )
            .transition(
                TransitionDescription::push(names::NBT_ARGUMENT, "NBTEquals")
                    .value(StateRef::local("ArgName")),
            )
            .transition(
                TransitionDescription::push(names::ADVANCEMENTS_ARGUMENT, "AdvancementsEquals")
                    .value(StateRef::local("ArgName")),
            )
            .transition(
                TransitionDescription::push(names::SELECTOR_ARGUMENT, "ArgEquals")
                    .value(StateRef::local("ArgName")),
            )
            .transition(TransitionDescription::pop(names::SELECTOR_CLOSE))
            .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "ArgEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "ArgValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "ArgValue",
            StateDescription::new(&[
                names::NEGATION,
                names::RANGE,
                names::STRING,
                "ArgRawValue",
                names::EOL,
            ])
            .define(GroupDef::new("ArgRawValue", r"[^,\]\s]+"))
            .transition(TransitionDescription::advance(names::NEGATION, "ArgValue"))
            .transition(TransitionDescription::on(names::EOL, Operation::End))
            .transition(TransitionDescription::any("ArgEnd")),
        )
        .state(
            "ArgEnd",
            StateDescription::default()
                .template("entry_tail")
                .define(GroupDef::new("EntrySeparator", ","))
                .define(GroupDef::new("EntryClose", r"(?=\])")),
        )
        .state(
            "ScoresEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "ScoresValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "ScoresValue",
            StateDescription::new(&["ScoresOpen", names::EOL])
                .define(GroupDef::new("ScoresOpen", r"\{"))
                .transition(
                    TransitionDescription::push("ScoresOpen", "ScoreName")
                        .value(StateRef::local("ArgEnd")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "ScoreName",
            StateDescription::new(&[names::SCORES_CLOSE, "ScoreObjective", names::EOL])
                .define(GroupDef::new(names::SCORES_CLOSE, r"\}"))
                .define(GroupDef::new("ScoreObjective", r"[\w.\-+]+"))
                .transition(TransitionDescription::pop(names::SCORES_CLOSE))
                .transition(
                    TransitionDescription::push("ScoreObjective", "ScoreEquals")
                        .value(StateRef::local("ScoreName")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "ScoreEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "ScoreValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "ScoreValue",
            StateDescription::new(&[names::RANGE, "Integer", names::EOL])
                .transition(TransitionDescription::on(names::EOL, Operation::End))
                .transition(TransitionDescription::any("ScoreEnd")),
        )
        .state(
            "ScoreEnd",
            StateDescription::default()
                .template("entry_tail")
                .define(GroupDef::new("EntrySeparator", ","))
                .define(GroupDef::new("EntryClose", r"(?=\})")),
        )
        .state(
            "NBTEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "NBTValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "NBTValue",
            StateDescription::new(&[names::NEGATION, names::COMPOUND_OPEN, names::EOL])
                .define(GroupDef::new(names::COMPOUND_OPEN, r"\{"))
                .transition(TransitionDescription::advance(names::NEGATION, "NBTValue"))
                .transition(
                    TransitionDescription::push(names::COMPOUND_OPEN, "CompoundEntry")
                        .in_region("nbt")
                        .value(StateRef::local("ArgEnd")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "AdvancementsEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "AdvancementsValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "AdvancementsValue",
            StateDescription::new(&["AdvancementsOpen", names::EOL])
                .define(GroupDef::new("AdvancementsOpen", r"\{"))
                .transition(
                    TransitionDescription::push("AdvancementsOpen", "AdvancementName")
                        .value(StateRef::local("ArgEnd")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "AdvancementName",
            StateDescription::new(&[names::ADVANCEMENTS_CLOSE, "AdvancementID", names::EOL])
                .define(GroupDef::new(names::ADVANCEMENTS_CLOSE, r"\}"))
                .define(GroupDef::new("AdvancementID", r"[\w:/.\-]+"))
                .transition(TransitionDescription::pop(names::ADVANCEMENTS_CLOSE))
                .transition(
                    TransitionDescription::push("AdvancementID", "AdvancementEquals")
                        .value(StateRef::local("AdvancementName")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "AdvancementEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "AdvancementValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "AdvancementValue",
            StateDescription::new(&[names::CRITERIA_OPEN, names::BOOLEAN, names::EOL])
                .define(GroupDef::new(names::CRITERIA_OPEN, r"\{"))
                .transition(
                    TransitionDescription::push(names::CRITERIA_OPEN, "CriterionName")
                        .value(StateRef::local("AdvancementEnd")),
                )
                .transition(TransitionDescription::advance(names::BOOLEAN, "AdvancementEnd"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "AdvancementEnd",
            StateDescription::default()
                .template("entry_tail")
                .define(GroupDef::new("EntrySeparator", ","))
                .define(GroupDef::new("EntryClose", r"(?=\})")),
        )
        .state(
            "CriterionName",
            StateDescription::new(&[names::CRITERIA_CLOSE, "CriterionID", names::EOL])
                .define(GroupDef::new(names::CRITERIA_CLOSE, r"\}"))
                .define(GroupDef::new("CriterionID", r"[\w:/.\-]+"))
                .transition(TransitionDescription::pop(names::CRITERIA_CLOSE))
                .transition(
                    TransitionDescription::push("CriterionID", "CriterionEquals")
                        .value(StateRef::local("CriterionName")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "CriterionEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "CriterionValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "CriterionValue",
            StateDescription::new(&[names::BOOLEAN, names::EOL])
                .transition(TransitionDescription::advance(names::BOOLEAN, "CriterionEnd"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "CriterionEnd",
            StateDescription::default()
                .template("entry_tail")
                .define(GroupDef::new("EntrySeparator", ","))
                .define(GroupDef::new("EntryClose", r"(?=\})")),
        )
}

fn nbt_region() -> RegionDescription {
    RegionDescription::default()
        .define(GroupDef::new(names::COMPOUND_OPEN, r"\{"))
        .define(GroupDef::new(names::COMPOUND_CLOSE, r"\}"))
        .define(GroupDef::new(names::LIST_CLOSE, r"\]"))
        .state(
            "CompoundEntry",
            StateDescription::new(&[names::COMPOUND_CLOSE, "TagName", names::EOL])
                .define(GroupDef::new("TagName", r"[\w.\-+]+"))
                .transition(TransitionDescription::pop(names::COMPOUND_CLOSE))
                .transition(
                    TransitionDescription::push("TagName", "TagColon")
                        .value(StateRef::local("CompoundEntry")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "TagColon",
            StateDescription::new(&["Colon", names::EOL])
                .tokenize(false)
                .define(GroupDef::new("Colon", r":\s*"))
                .transition(TransitionDescription::advance("Colon", "TagValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "TagValue",
            StateDescription::new(&[
                names::BYTE_ARRAY_OPEN,
                names::INT_ARRAY_OPEN,
                names::LONG_ARRAY_OPEN,
                names::LIST_OPEN,
                names::COMPOUND_OPEN,
                names::NUMBER,
                names::STRING,
                names::WORD,
                names::EOL,
            ])
            .define(GroupDef::new(names::BYTE_ARRAY_OPEN, r"\[B;"))
            .define(GroupDef::new(names::INT_ARRAY_OPEN, r"\[I;"))
            .define(GroupDef::new(names::LONG_ARRAY_OPEN, r"\[L;"))
            .define(GroupDef::new(names::LIST_OPEN, r"\["))
            .transition(
                TransitionDescription::push(names::BYTE_ARRAY_OPEN, "ArrayValue")
                    .value(StateRef::local("TagEnd")),
            )
            .transition(
                TransitionDescription::push(names::INT_ARRAY_OPEN, "ArrayValue")
                    .value(StateRef::local("TagEnd")),
            )
            .transition(
                TransitionDescription::push(names::LONG_ARRAY_OPEN, "ArrayValue")
                    .value(StateRef::local("TagEnd")),
            )
            .transition(
                TransitionDescription::push(names::LIST_OPEN, "ListEntry")
                    .value(StateRef::local("TagEnd")),
            )
            .transition(
                TransitionDescription::push(names::COMPOUND_OPEN, "CompoundEntry")
                    .value(StateRef::local("TagEnd")),
            )
            .transition(TransitionDescription::on(names::EOL, Operation::End))
            .transition(TransitionDescription::any("TagEnd")),
        )
        .state(
            "TagEnd",
            StateDescription::default()
                .template("entry_tail")
                .define(GroupDef::new("EntrySeparator", r"\s*,\s*"))
                .define(GroupDef::new("EntryClose", r"(?=[}\]])")),
        )
        .state(
            "ListEntry",
            StateDescription::new(&[names::LIST_CLOSE, names::EOL, "ListElem"])
                .define(GroupDef::new("ListElem", r"(?=[^\]])"))
                .transition(TransitionDescription::pop(names::LIST_CLOSE))
                .transition(TransitionDescription::on(names::EOL, Operation::End))
                .transition(
                    TransitionDescription::push("ListElem", "TagValue")
                        .value(StateRef::local("ListEntry")),
                ),
        )
        .state(
            "ArrayValue",
            // Elements lex as numbers; the promoter rejects anything that is
            // not a plain integer of the array's kind.
            StateDescription::new(&[names::LIST_CLOSE, names::NUMBER, names::EOL])
                .transition(TransitionDescription::pop(names::LIST_CLOSE))
                .transition(TransitionDescription::advance(names::NUMBER, "ArraySep"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "ArraySep",
            StateDescription::new(&["ArraySeparator", "ArrayNext", names::EOL])
                .tokenize(false)
                .define(GroupDef::new("ArraySeparator", r"\s*,\s*"))
                .define(GroupDef::new("ArrayNext", r"(?=\])"))
                .transition(TransitionDescription::advance("ArraySeparator", "ArrayValue"))
                .transition(TransitionDescription::advance("ArrayNext", "ArrayValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
}

fn blockstates_region() -> RegionDescription {
    RegionDescription::default()
        .state(
            "StateEntry",
            StateDescription::new(&[names::BLOCK_STATES_END, "StateName", names::EOL])
                .define(GroupDef::new(names::BLOCK_STATES_END, r"\]"))
                .define(GroupDef::new("StateName", r"[A-Za-z_]\w*"))
                .transition(TransitionDescription::pop(names::BLOCK_STATES_END))
                .transition(
                    TransitionDescription::push("StateName", "StateEquals")
                        .value(StateRef::local("StateEntry")),
                )
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "StateEquals",
            StateDescription::new(&["Equals", names::EOL])
                .tokenize(false)
                .transition(TransitionDescription::advance("Equals", "StateValue"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "StateValue",
            StateDescription::new(&["StateLiteral", names::EOL])
                .define(GroupDef::new("StateLiteral", r"[\w.\-+]+"))
                .transition(TransitionDescription::advance("StateLiteral", "StateEnd"))
                .transition(TransitionDescription::on(names::EOL, Operation::End)),
        )
        .state(
            "StateEnd",
            StateDescription::default()
                .template("entry_tail")
                .define(GroupDef::new("EntrySeparator", ","))
                .define(GroupDef::new("EntryClose", r"(?=\])")),
        )
}
