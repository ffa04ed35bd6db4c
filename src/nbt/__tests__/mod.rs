use crate::nbt::{escape_string, unescape_string, Tag, TagKind, TagPayload};

#[test]
fn scalar_display_forms() {
    assert_eq!(Tag::new("", TagPayload::Byte(1)).to_string(), "1b");
    assert_eq!(Tag::new("", TagPayload::Short(-5)).to_string(), "-5s");
    assert_eq!(Tag::new("", TagPayload::Int(42)).to_string(), "42");
    assert_eq!(Tag::new("", TagPayload::Long(9)).to_string(), "9l");
    assert_eq!(Tag::new("", TagPayload::Float(1.5)).to_string(), "1.5f");
    assert_eq!(Tag::new("", TagPayload::Double(2.25)).to_string(), "2.25");
    assert_eq!(Tag::new("", TagPayload::Boolean(true)).to_string(), "true");
    assert_eq!(Tag::new("", TagPayload::Boolean(false)).to_string(), "false");
}

#[test]
fn whole_valued_double_keeps_decimal_point() {
    // Without the point the literal would read back as an int.
    assert_eq!(Tag::new("", TagPayload::Double(3.0)).to_string(), "3.0");
}

#[test]
fn string_display_is_quoted_and_escaped() {
    let tag = Tag::new("", TagPayload::String("a \"b\"\nc\\d".to_string()));
    assert_eq!(tag.to_string(), "\"a \\\"b\\\"\\nc\\\\d\"");
}

#[test]
fn array_display_forms() {
    assert_eq!(
        Tag::new("", TagPayload::ByteArray(vec![1, 2])).to_string(),
        "[B;1,2]"
    );
    assert_eq!(
        Tag::new("", TagPayload::IntArray(vec![-1, 0, 7])).to_string(),
        "[I;-1,0,7]"
    );
    assert_eq!(
        Tag::new("", TagPayload::LongArray(vec![5])).to_string(),
        "[L;5]"
    );
}

#[test]
fn compound_and_list_display_forms() {
    let compound = Tag::new(
        "",
        TagPayload::Compound(vec![
            Tag::new("Count", TagPayload::Byte(1)),
            Tag::new("id", TagPayload::String("minecraft:stone".to_string())),
        ]),
    );
    assert_eq!(compound.to_string(), "{Count:1b,id:\"minecraft:stone\"}");

    let list = Tag::new(
        "",
        TagPayload::List(
            TagKind::Int,
            vec![Tag::new("", TagPayload::Int(1)), Tag::new("", TagPayload::Int(2))],
        ),
    );
    assert_eq!(list.to_string(), "[1,2]");

    let generic = Tag::new(
        "",
        TagPayload::GenericList(vec![
            Tag::new("", TagPayload::Byte(1)),
            Tag::new("", TagPayload::Short(2)),
        ]),
    );
    assert_eq!(generic.to_string(), "[1b,2s]");
    assert_eq!(generic.kind(), TagKind::GenericList);
}

#[test]
fn compound_emptiness_queries() {
    let empty = Tag::empty_compound();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.to_string(), "{}");

    let full = Tag::new("", TagPayload::Compound(vec![Tag::new("a", TagPayload::Int(1))]));
    assert!(!full.is_empty());
    assert_eq!(full.len(), 1);
}

#[test]
fn string_escape_round_trip() {
    assert_eq!(unescape_string(r"a\nb"), "a\nb");
    assert_eq!(unescape_string(r#"say \"hi\""#), "say \"hi\"");
    assert_eq!(unescape_string(r"back\\slash"), "back\\slash");
    assert_eq!(unescape_string(r"A"), "A");
    // Unknown escapes keep both characters.
    assert_eq!(unescape_string(r"\q"), "\\q");

    let original = "mixed \"quotes\" and\nnewlines\\";
    assert_eq!(unescape_string(&escape_string(original)), original);
}
