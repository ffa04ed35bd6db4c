use crate::minecraft::{
    parse, rebuild_command, tokenize, ArgumentValue, AdvancementValue, CommandError, HybridPart,
    Parameter, RangeValue, SelectorArgument, SelectorKind,
};
use crate::nbt::{Tag, TagKind, TagPayload};
use crate::ParseError;

fn reparse_matches(line: &str) {
    let parameters = parse(line).unwrap();
    let rebuilt = rebuild_command(&parameters);
    let reparsed = parse(&rebuilt).unwrap();
    assert_eq!(parameters, reparsed, "round trip of {:?} via {:?}", line, rebuilt);
}

/// The NBT of a single hybrid parameter, for classification tests.
fn hybrid_nbt(line: &str) -> Tag {
    let parameters = parse(line).unwrap();
    match parameters.last() {
        Some(Parameter::Hybrid(parts)) => match parts.first() {
            Some(HybridPart::Nbt(tag)) => tag.clone(),
            other => panic!("expected an NBT part, got {:?}", other),
        },
        other => panic!("expected a hybrid parameter, got {:?}", other),
    }
}

fn first_compound_value(tag: &Tag) -> Tag {
    match tag.payload() {
        TagPayload::Compound(tags) => tags[0].clone(),
        other => panic!("expected a compound, got {:?}", other),
    }
}

#[test]
fn plain_keyword_and_integers() {
    let parameters = parse("tp @s 0 64 0").unwrap();
    assert_eq!(
        parameters,
        vec![
            Parameter::Generic("tp".to_string()),
            Parameter::Selector {
                kind: SelectorKind::Executor,
                args: vec![],
            },
            Parameter::Raw("0".to_string()),
            Parameter::Raw("64".to_string()),
            Parameter::Raw("0".to_string()),
        ]
    );
    assert_eq!(rebuild_command(&parameters), "tp @s 0 64 0");
}

#[test]
fn selector_with_scores_and_negation() {
    let line = "kill @e[type=!zombie,scores={kills=1..}]";
    let parameters = parse(line).unwrap();
    assert_eq!(
        parameters[1],
        Parameter::Selector {
            kind: SelectorKind::AllEntities,
            args: vec![
                SelectorArgument {
                    name: "type".to_string(),
                    value: ArgumentValue::Raw("zombie".to_string()),
                    negated: true,
                },
                SelectorArgument {
                    name: "scores".to_string(),
                    value: ArgumentValue::Scores(vec![(
                        "kills".to_string(),
                        RangeValue::bounded(Some(1), None),
                    )]),
                    negated: false,
                },
            ],
        }
    );
    assert_eq!(rebuild_command(&parameters), line);
}

#[test]
fn namespaced_id_with_block_states_and_nbt() {
    let line = "setblock 0 0 0 minecraft:chest[facing=north]{Items:[{Slot:0b,id:\"minecraft:stone\",Count:1b}]}";
    let parameters = parse(line).unwrap();

    let expected_nbt = Tag::new(
        "",
        TagPayload::Compound(vec![Tag::new(
            "Items",
            TagPayload::List(
                TagKind::Compound,
                vec![Tag::new(
                    "",
                    TagPayload::Compound(vec![
                        Tag::new("Slot", TagPayload::Byte(0)),
                        Tag::new("id", TagPayload::String("minecraft:stone".to_string())),
                        Tag::new("Count", TagPayload::Byte(1)),
                    ]),
                )],
            ),
        )]),
    );
    assert_eq!(
        parameters[4],
        Parameter::NamespacedId {
            namespace: Some("minecraft".to_string()),
            name: "chest".to_string(),
            block_states: vec![("facing".to_string(), "north".to_string())],
            nbt: expected_nbt,
        }
    );
    assert_eq!(rebuild_command(&parameters), line);
}

#[test]
fn range_as_score_operand() {
    let parameters = parse("execute if score @s obj matches ..10").unwrap();
    let range = match parameters.last() {
        Some(Parameter::Range(range)) => *range,
        other => panic!("expected a range parameter, got {:?}", other),
    };
    assert_eq!(range, RangeValue::bounded(None, Some(10)));
    assert_eq!(range.to_string(), "..10");
    assert_eq!(
        rebuild_command(&parameters),
        "execute if score @s obj matches ..10"
    );
}

#[test]
fn comment_line() {
    let parameters = parse("# hello world").unwrap();
    assert_eq!(
        parameters,
        vec![Parameter::Comment(" hello world".to_string())]
    );
    assert_eq!(rebuild_command(&parameters), "#  hello world");

    let empty = parse("#").unwrap();
    assert_eq!(empty, vec![Parameter::Comment(String::new())]);
}

#[test]
fn heterogeneous_list_becomes_generic() {
    let parameters = parse("data merge block 0 0 0 {x:[1b,2s]}").unwrap();
    let tag = match parameters.last() {
        Some(Parameter::Hybrid(parts)) => match &parts[0] {
            HybridPart::Nbt(tag) => tag.clone(),
            other => panic!("expected NBT, got {:?}", other),
        },
        other => panic!("expected a hybrid parameter, got {:?}", other),
    };
    let inner = first_compound_value(&tag);
    assert_eq!(inner.name(), "x");
    assert_eq!(
        inner.payload(),
        &TagPayload::GenericList(vec![
            Tag::new("", TagPayload::Byte(1)),
            Tag::new("", TagPayload::Short(2)),
        ])
    );
    assert_eq!(
        rebuild_command(&parameters),
        "data merge block 0 0 0 {x:[1b,2s]}"
    );
}

#[test]
fn number_suffixes_classify_tag_kinds() {
    let cases = [
        ("{a:1b}", TagPayload::Byte(1)),
        ("{a:2B}", TagPayload::Byte(2)),
        ("{a:3s}", TagPayload::Short(3)),
        ("{a:4l}", TagPayload::Long(4)),
        ("{a:1.5f}", TagPayload::Float(1.5)),
        ("{a:2.5d}", TagPayload::Double(2.5)),
        ("{a:2.5}", TagPayload::Double(2.5)),
        ("{a:7}", TagPayload::Int(7)),
    ];
    for (line, expected) in cases {
        let tag = hybrid_nbt(&format!("say {}", line));
        let value = first_compound_value(&tag);
        assert_eq!(value.payload(), &expected, "for {}", line);
    }
}

#[test]
fn words_classify_as_boolean_or_string() {
    let tag = hybrid_nbt("say {a:true}");
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::Boolean(true)
    );
    let tag = hybrid_nbt("say {a:false}");
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::Boolean(false)
    );
    let tag = hybrid_nbt("say {a:stone}");
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::String("stone".to_string())
    );
}

#[test]
fn quoted_strings_are_unescaped() {
    let tag = hybrid_nbt(r#"say {a:"b \"c\" d"}"#);
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::String("b \"c\" d".to_string())
    );
}

#[test]
fn uniform_list_keeps_its_kind() {
    let tag = hybrid_nbt("say {a:[1b,2b]}");
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::List(
            TagKind::Byte,
            vec![Tag::new("", TagPayload::Byte(1)), Tag::new("", TagPayload::Byte(2))]
        )
    );
}

#[test]
fn typed_arrays_collect_integers() {
    let tag = hybrid_nbt("say {a:[B;1,2]}");
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::ByteArray(vec![1, 2])
    );
    let tag = hybrid_nbt("say {a:[I;3,-4]}");
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::IntArray(vec![3, -4])
    );
    let tag = hybrid_nbt("say {a:[L;5]}");
    assert_eq!(
        first_compound_value(&tag).payload(),
        &TagPayload::LongArray(vec![5])
    );
}

#[test]
fn suffixed_array_element_is_a_promotion_error() {
    match parse("say {a:[B;1b]}") {
        Err(CommandError::Promotion { message }) => {
            assert!(message.contains("byte array"), "{}", message)
        }
        other => panic!("expected a promotion error, got {:?}", other),
    }
}

#[test]
fn range_promotion_table() {
    assert_eq!(RangeValue::parse("5").unwrap(), RangeValue::single(5));
    assert_eq!(RangeValue::parse("0").unwrap(), RangeValue::single(0));
    assert_eq!(
        RangeValue::parse("1..3").unwrap(),
        RangeValue::bounded(Some(1), Some(3))
    );
    assert_eq!(
        RangeValue::parse("1..").unwrap(),
        RangeValue::bounded(Some(1), None)
    );
    assert_eq!(
        RangeValue::parse("..3").unwrap(),
        RangeValue::bounded(None, Some(3))
    );
    assert_eq!(
        RangeValue::parse("-2..-1").unwrap(),
        RangeValue::bounded(Some(-2), Some(-1))
    );

    assert_eq!(RangeValue::single(5).to_string(), "5");
    assert_eq!(RangeValue::bounded(Some(1), Some(3)).to_string(), "1..3");
    assert_eq!(RangeValue::bounded(Some(1), None).to_string(), "1..");
    assert_eq!(RangeValue::bounded(None, Some(3)).to_string(), "..3");
}

#[test]
fn nbt_selector_argument_with_negation() {
    let line = "kill @e[nbt=!{Invisible:1b}]";
    let parameters = parse(line).unwrap();
    assert_eq!(
        parameters[1],
        Parameter::Selector {
            kind: SelectorKind::AllEntities,
            args: vec![SelectorArgument {
                name: "nbt".to_string(),
                value: ArgumentValue::Nbt(Tag::new(
                    "",
                    TagPayload::Compound(vec![Tag::new("Invisible", TagPayload::Byte(1))])
                )),
                negated: true,
            }],
        }
    );
    assert_eq!(rebuild_command(&parameters), line);
}

#[test]
fn advancements_argument_with_nested_criteria() {
    let line = "kill @e[advancements={story/root=true,story/iron={iron_pickaxe=true,stone=false}}]";
    let parameters = parse(line).unwrap();
    match &parameters[1] {
        Parameter::Selector { args, .. } => {
            assert_eq!(args.len(), 1);
            assert_eq!(args[0].name, "advancements");
            assert_eq!(
                args[0].value,
                ArgumentValue::Advancements(vec![
                    ("story/root".to_string(), AdvancementValue::Done(true)),
                    (
                        "story/iron".to_string(),
                        AdvancementValue::Criteria(vec![
                            ("iron_pickaxe".to_string(), true),
                            ("stone".to_string(), false),
                        ])
                    ),
                ])
            );
        }
        other => panic!("expected a selector, got {:?}", other),
    }
    assert_eq!(rebuild_command(&parameters), line);
}

#[test]
fn hybrid_with_index_and_block_states() {
    let parameters = parse("say [0]{a:1b}").unwrap();
    assert_eq!(
        parameters[1],
        Parameter::Hybrid(vec![
            HybridPart::ListIndex(Box::new(HybridPart::Raw("0".to_string()))),
            HybridPart::Nbt(Tag::new(
                "",
                TagPayload::Compound(vec![Tag::new("a", TagPayload::Byte(1))])
            )),
        ])
    );
    assert_eq!(rebuild_command(&parameters), "say [0]{a:1b}");

    let parameters = parse("say [facing=north,half=top]").unwrap();
    assert_eq!(
        parameters[1],
        Parameter::Hybrid(vec![HybridPart::BlockStates(vec![
            ("facing".to_string(), "north".to_string()),
            ("half".to_string(), "top".to_string()),
        ])])
    );
    assert_eq!(rebuild_command(&parameters), "say [facing=north,half=top]");
}

#[test]
fn quoted_string_parameter_stays_whole() {
    let line = "say \"hello world\"";
    let parameters = parse(line).unwrap();
    assert_eq!(
        parameters,
        vec![
            Parameter::Generic("say".to_string()),
            Parameter::Raw("\"hello world\"".to_string()),
        ]
    );
    assert_eq!(rebuild_command(&parameters), line);
}

#[test]
fn leading_slash_is_consumed() {
    let parameters = parse("/say hi").unwrap();
    assert_eq!(
        parameters,
        vec![
            Parameter::Generic("say".to_string()),
            Parameter::Generic("hi".to_string()),
        ]
    );
    assert_eq!(rebuild_command(&parameters), "say hi");
}

#[test]
fn empty_selector_brackets_normalize_away() {
    let parameters = parse("kill @e[]").unwrap();
    assert_eq!(
        parameters[1],
        Parameter::Selector {
            kind: SelectorKind::AllEntities,
            args: vec![],
        }
    );
    assert_eq!(rebuild_command(&parameters), "kill @e");
}

#[test]
fn empty_line_parses_to_nothing() {
    assert_eq!(parse("").unwrap(), vec![]);
    assert_eq!(parse("   ").unwrap(), vec![]);
}

#[test]
fn unterminated_compound_reports_end_of_line() {
    match parse("say {unclosed") {
        Err(CommandError::Syntax(ParseError::EndOfLine { .. })) => {}
        other => panic!("expected EndOfLine, got {:?}", other),
    }
}

#[test]
fn unknown_character_in_argument_list_reports_invalid_token() {
    let error = match parse("kill @e[;]") {
        Err(CommandError::Syntax(error)) => error,
        other => panic!("expected a syntax error, got {:?}", other),
    };
    match &error {
        ParseError::InvalidToken { pointer, .. } => assert_eq!(*pointer, 8),
        other => panic!("expected InvalidToken, got {:?}", other),
    }
    assert!(error
        .to_string()
        .contains("Could not match line to an appropriate group HERE --> ;]"));
}

#[test]
fn tokenize_exposes_raw_structure() {
    let tokens = tokenize("setblock 0 0 0 minecraft:chest[facing=north]{Items:[]}").unwrap();
    let id = tokens
        .iter()
        .find(|t| t.group_name() == "NamespacedID")
        .unwrap();
    assert_eq!(id.matched(), "minecraft:chest");
    assert!(id.get_child("BlockStatesOpen").is_some());
    assert!(id.get_child("CompoundOpen").is_some());
    assert!(id.contains("BlockStatesEnd"));
}

#[test]
fn selector_kinds_map_to_symbols() {
    for (symbol, kind) in [
        ("@a", SelectorKind::AllPlayers),
        ("@e", SelectorKind::AllEntities),
        ("@p", SelectorKind::NearestPlayer),
        ("@r", SelectorKind::RandomPlayer),
        ("@s", SelectorKind::Executor),
    ] {
        assert_eq!(SelectorKind::from_symbol(symbol), Some(kind));
        assert_eq!(kind.symbol(), symbol);
    }
    assert_eq!(SelectorKind::from_symbol("@x"), None);
}

#[test]
fn parse_rebuild_round_trips_are_idempotent() {
    for line in [
        "tp @s 0 64 0",
        "kill @e[type=!zombie,scores={kills=1..}]",
        "setblock 0 0 0 minecraft:chest[facing=north]{Items:[{Slot:0b,id:\"minecraft:stone\",Count:1b}]}",
        "execute if score @s obj matches ..10",
        "# hello world",
        "data merge block 0 0 0 {x:[1b,2s]}",
        "kill @e[advancements={story/root=true}]",
        "give @p minecraft:stone 64",
        "say ~ ~1.5 ^-2",
        "/say hi",
    ] {
        reparse_matches(line);
    }
}
