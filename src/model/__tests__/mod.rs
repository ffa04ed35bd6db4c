use crate::model::{
    Group, GroupDef, Model, ModelDescription, Operation, RegionDescription, StateDescription,
    StateRef, TemplateDescription, TransitionDescription,
};
use crate::{ParseError, Parser, Token};
use serde_json::json;
use std::collections::HashMap;

fn concat_text(tokens: &[Token]) -> String {
    let mut text = String::new();
    for token in tokens {
        text.push_str(token.matched());
        text.push_str(&concat_text(token.children()));
    }
    text
}

fn single_region(states: Vec<(&str, StateDescription)>) -> ModelDescription {
    let mut map = HashMap::new();
    for (name, state) in states {
        map.insert(name.to_string(), state);
    }
    ModelDescription::new(StateRef::new("main", "Start"))
        .region("main", RegionDescription::new(map))
}

fn nesting_model() -> ModelDescription {
    single_region(vec![(
        "Start",
        StateDescription::new(&["Open", "Close", "Word", "Space", "EOL"])
            .define(GroupDef::new("Open", r"\("))
            .define(GroupDef::new("Close", r"\)"))
            .define(GroupDef::new("Space", r"\s+"))
            .define(GroupDef::new("EOL", r"$"))
            .transition(TransitionDescription::push("Open", "Start"))
            .transition(TransitionDescription::pop("Close"))
            .transition(TransitionDescription::on("EOL", Operation::End)),
    )])
}

#[test]
fn keyword_group_escapes_alternation() {
    let group = Group::keyword("Op", &["|", "a|b", "plus"]);
    assert_eq!(group.regex(), r"\||a\|b|plus");
}

#[test]
fn flat_tokenization_preserves_input() {
    let description = single_region(vec![(
        "Start",
        StateDescription::new(&["Word", "Space", "EOL"])
            .define(GroupDef::new("Space", r"\s+"))
            .define(GroupDef::new("EOL", r"$"))
            .transition(TransitionDescription::on("EOL", Operation::End)),
    )]);
    let parser = Parser::new(Model::from_description(&description).unwrap());

    let tokens = parser.tokenize("one two  three").unwrap();
    assert_eq!(concat_text(&tokens), "one two  three");
    let words: Vec<&str> = tokens.iter().map(|t| t.matched()).collect();
    assert_eq!(words, vec!["one", " ", "two", "  ", "three", ""]);
}

#[test]
fn push_pop_builds_nested_children() {
    let parser = Parser::new(Model::from_description(&nesting_model()).unwrap());

    let tokens = parser.tokenize("a(b c)d").unwrap();
    assert_eq!(concat_text(&tokens), "a(b c)d");

    // Top level: a, the open token owning the nested run, d, and EOL.
    assert_eq!(tokens.len(), 4);
    let nested = &tokens[1];
    assert_eq!(nested.matched(), "(");
    let children: Vec<&str> = nested.children().iter().map(|t| t.matched()).collect();
    assert_eq!(children, vec!["b", " ", "c", ")"]);

    assert!(nested.contains("Close"));
    assert_eq!(nested.get_child("Word").unwrap().matched(), "b");
}

#[test]
fn unclosed_frame_reports_end_of_line() {
    let parser = Parser::new(Model::from_description(&nesting_model()).unwrap());
    match parser.tokenize("a(bc") {
        Err(ParseError::EndOfLine { pointer, .. }) => assert_eq!(pointer, 4),
        other => panic!("expected EndOfLine, got {:?}", other),
    }
}

#[test]
fn stray_close_falls_back_to_self_loop() {
    // A POP candidate with an empty stack is skipped, so the close
    // parenthesis falls back to the self-loop and the line tokenizes as a
    // flat run.
    let parser = Parser::new(Model::from_description(&nesting_model()).unwrap());
    let tokens = parser.tokenize("a)b").unwrap();
    assert_eq!(concat_text(&tokens), "a)b");
}

#[test]
fn end_with_remaining_input_reports_incomplete_parsing() {
    let description = single_region(vec![
        (
            "Start",
            StateDescription::new(&["Slash", "Word", "Space"])
                .define(GroupDef::new("Slash", "/"))
                .define(GroupDef::new("Space", r"\s+"))
                .transition(TransitionDescription::advance("Slash", "Start"))
                .transition(TransitionDescription::advance("Space", "Last"))
                .transition(TransitionDescription::advance("Word", "Start")),
        ),
        (
            "Last",
            StateDescription::new(&["Word"])
                .transition(TransitionDescription::on("Word", Operation::End)),
        ),
    ]);
    let parser = Parser::new(Model::from_description(&description).unwrap());

    match parser.tokenize("/say hi!!extrajunk") {
        Err(ParseError::IncompleteParsing { pointer, .. }) => assert_eq!(pointer, 7),
        other => panic!("expected IncompleteParsing, got {:?}", other),
    }
    assert!(parser.tokenize("/say hi").is_ok());
}

#[test]
fn unmatchable_input_reports_invalid_token() {
    let description = single_region(vec![(
        "Start",
        StateDescription::new(&["Word", "EOL"])
            .define(GroupDef::new("EOL", r"$"))
            .transition(TransitionDescription::on("EOL", Operation::End)),
    )]);
    let parser = Parser::new(Model::from_description(&description).unwrap());

    let error = parser.tokenize("ab !cd").unwrap_err();
    match &error {
        ParseError::InvalidToken { pointer, .. } => assert_eq!(*pointer, 2),
        other => panic!("expected InvalidToken, got {:?}", other),
    }
    let message = error.to_string();
    assert!(message.contains("Could not match line to an appropriate group"));
    assert!(message.contains("HERE -->  !cd"));
}

#[test]
fn zero_width_self_loop_is_detected() {
    let description = single_region(vec![(
        "Start",
        StateDescription::new(&["Mark"]).define(GroupDef::new("Mark", r"(?=a)")),
    )]);
    let parser = Parser::new(Model::from_description(&description).unwrap());

    match parser.tokenize("abc") {
        Err(ParseError::InvalidToken { pointer, .. }) => assert_eq!(pointer, 0),
        other => panic!("expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn peek_transition_guards_on_pushed_state() {
    let states = vec![
        (
            "Start",
            StateDescription::new(&["A", "B", "EOL"])
                .define(GroupDef::new("A", "a"))
                .define(GroupDef::new("B", "b"))
                .define(GroupDef::new("EOL", r"$"))
                .transition(
                    TransitionDescription::push("A", "Inner").value(StateRef::local("AfterA")),
                )
                .transition(
                    TransitionDescription::push("B", "Inner").value(StateRef::local("AfterB")),
                )
                .transition(TransitionDescription::on("EOL", Operation::End)),
        ),
        (
            "Inner",
            StateDescription::new(&["X"])
                .define(GroupDef::new("X", "x"))
                .transition(
                    TransitionDescription::peek("X", "NeedP").value(StateRef::local("AfterA")),
                )
                .transition(TransitionDescription::advance("X", "NeedQ")),
        ),
        (
            "NeedP",
            StateDescription::new(&["P"])
                .define(GroupDef::new("P", "p"))
                .transition(TransitionDescription::pop("P")),
        ),
        (
            "NeedQ",
            StateDescription::new(&["Q"])
                .define(GroupDef::new("Q", "q"))
                .transition(TransitionDescription::pop("Q")),
        ),
        (
            "AfterA",
            StateDescription::new(&["EOL"])
                .define(GroupDef::new("EOL", r"$"))
                .transition(TransitionDescription::on("EOL", Operation::End)),
        ),
        (
            "AfterB",
            StateDescription::new(&["EOL"])
                .define(GroupDef::new("EOL", r"$"))
                .transition(TransitionDescription::on("EOL", Operation::End)),
        ),
    ];
    let parser = Parser::new(Model::from_description(&single_region(states)).unwrap());

    // The PEEK guard sees the frame pushed for 'a' and routes to NeedP.
    assert!(parser.tokenize("axp").is_ok());
    // For 'b' the guard fails and the plain transition routes to NeedQ.
    assert!(parser.tokenize("bxq").is_ok());
    assert!(matches!(
        parser.tokenize("bxp"),
        Err(ParseError::InvalidToken { .. })
    ));
}

#[test]
fn template_contributes_groups_transitions_and_tokenize() {
    let description = ModelDescription::new(StateRef::new("main", "Start"))
        .template(
            "tail",
            TemplateDescription::new(&["Stop"])
                .define(GroupDef::new("Stop", r"$"))
                .tokenize(false)
                .transition(TransitionDescription::on("Stop", Operation::End)),
        )
        .region(
            "main",
            RegionDescription::default().state(
                "Start",
                StateDescription::new(&["Word"]).template("tail"),
            ),
        );
    let model = Model::from_description(&description).unwrap();
    let start = model.state(model.start());

    // Template groups come first; the state inherits the template's flag.
    let group_names: Vec<&str> = start.groups().iter().map(|g| g.name()).collect();
    assert_eq!(group_names, vec!["Stop", "Word"]);
    assert!(!start.tokenize());

    let parser = Parser::new(model);
    assert_eq!(parser.tokenize("word").unwrap().len(), 0);
}

#[test]
fn state_definition_shadows_region_vocabulary_without_leaking() {
    let description = ModelDescription::new(StateRef::new("main", "Start"))
        .region(
            "main",
            RegionDescription::default()
                .define(GroupDef::new("Value", "[a-z]+"))
                .define(GroupDef::new("EOL", r"$"))
                .state(
                    "Start",
                    StateDescription::new(&["Value", "EOL"])
                        .define(GroupDef::new("Value", r"\d+"))
                        .transition(TransitionDescription::advance("Value", "Other"))
                        .transition(TransitionDescription::on("EOL", Operation::End)),
                )
                .state(
                    "Other",
                    StateDescription::new(&["Value", "EOL"])
                        .transition(TransitionDescription::on("EOL", Operation::End)),
                ),
        );
    let parser = Parser::new(Model::from_description(&description).unwrap());

    // Start sees the state-level digits pattern; Other still sees the
    // region-level letters pattern.
    assert!(parser.tokenize("123abc").is_ok());
    assert!(parser.tokenize("abc123").is_err());
}

#[test]
fn cyclic_state_references_resolve() {
    let description = single_region(vec![
        (
            "Start",
            StateDescription::new(&["A", "EOL"])
                .define(GroupDef::new("A", "a"))
                .define(GroupDef::new("EOL", r"$"))
                .transition(TransitionDescription::advance("A", "Other"))
                .transition(TransitionDescription::on("EOL", Operation::End)),
        ),
        (
            "Other",
            StateDescription::new(&["B", "EOL"])
                .define(GroupDef::new("B", "b"))
                .define(GroupDef::new("EOL", r"$"))
                .transition(TransitionDescription::advance("B", "Start"))
                .transition(TransitionDescription::on("EOL", Operation::End)),
        ),
    ]);
    let model = Model::from_description(&description).unwrap();
    assert!(model.find_state("main", "Start").is_some());
    assert!(model.find_state("main", "Other").is_some());

    let parser = Parser::new(model);
    assert!(parser.tokenize("abab").is_ok());
    assert!(parser.tokenize("abba").is_err());
}

#[test]
fn missing_references_fail_at_build_time() {
    let missing_region = ModelDescription::new(StateRef::new("nowhere", "Start"));
    let error = Model::from_description(&missing_region).unwrap_err();
    assert!(error.to_string().contains("region 'nowhere'"));

    let missing_state = single_region(vec![(
        "Start",
        StateDescription::new(&["Word"]).transition(TransitionDescription::advance("Word", "Gone")),
    )]);
    let error = Model::from_description(&missing_state).unwrap_err();
    assert!(error.to_string().contains("state 'main.Gone'"));

    let missing_group = single_region(vec![("Start", StateDescription::new(&["NoSuchGroup"]))]);
    let error = Model::from_description(&missing_group).unwrap_err();
    assert!(error.to_string().contains("group 'NoSuchGroup'"));

    let missing_template =
        single_region(vec![("Start", StateDescription::new(&["Word"]).template("gone"))]);
    let error = Model::from_description(&missing_template).unwrap_err();
    assert!(error.to_string().contains("template 'gone'"));

    let missing_target = single_region(vec![(
        "Start",
        StateDescription::new(&["Word"])
            .transition(TransitionDescription::on("Word", Operation::Push)),
    )]);
    let error = Model::from_description(&missing_target).unwrap_err();
    assert!(error.to_string().contains("target state"));
}

#[test]
fn model_resolves_from_json_record() {
    let record = json!({
        "start": { "region": "main", "state": "Start" },
        "group_defs": [ { "name": "EOL", "regex": "$" } ],
        "regions": {
            "main": {
                "states": {
                    "Start": {
                        "groups": ["Open", "Close", "Word", "EOL"],
                        "group_defs": [
                            { "name": "Open", "regex": "\\(" },
                            { "name": "Close", "regex": "\\)" }
                        ],
                        "transitions": [
                            { "group": "Open", "target": "Start", "operation": "push" },
                            { "group": "Close", "operation": "pop" },
                            { "group": "EOL", "operation": "end" }
                        ]
                    }
                }
            }
        }
    });
    let parser = Parser::new(Model::from_json(&record).unwrap());

    let tokens = parser.tokenize("a(b)c").unwrap();
    assert_eq!(concat_text(&tokens), "a(b)c");
    assert_eq!(tokens[1].children().len(), 2);

    let bad_operation = json!({
        "start": { "region": "main", "state": "Start" },
        "regions": {
            "main": {
                "states": {
                    "Start": {
                        "groups": ["Word"],
                        "transitions": [ { "group": "Word", "operation": "jump" } ]
                    }
                }
            }
        }
    });
    let error = Model::from_json(&bad_operation).unwrap_err();
    assert!(error.to_string().contains("unknown transition operation"));
}
