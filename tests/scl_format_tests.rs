//! Behavior of the SCL text format: literal scenarios, error positions and the
//! serializer's canonical layout.

use serde_scl::{
    dumps, dumps_with_options, loads, parse, tokenize, Error, SclMap, SclOptions, TokenKind, Value,
};

fn tree(entries: Vec<(&str, Value)>) -> SclMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

// Literal scenarios

#[test]
fn test_bool_yes_normalizes_to_true() {
    let parsed = loads("x :: bool { yes }").unwrap();
    assert_eq!(parsed, tree(vec![("x", Value::Bool(true))]));
    assert_eq!(dumps(&parsed).unwrap(), "x :: bool { true }\n");
}

#[test]
fn test_negative_integer_round_trips_byte_identical() {
    let text = "n :: num { -42 }\n";
    let parsed = loads(text).unwrap();
    assert_eq!(parsed.get("n"), Some(&Value::Integer(-42)));
    assert_eq!(dumps(&parsed).unwrap(), text);
}

#[test]
fn test_integer_coerced_to_float() {
    let parsed = loads("f :: fl { 5 }").unwrap();
    assert_eq!(parsed.get("f"), Some(&Value::Float(5.0)));
    assert_eq!(dumps(&parsed).unwrap(), "f :: fl { 5.0 }\n");
}

#[test]
fn test_num_list() {
    let parsed = loads("lst :: list(num) { 1, 2, 3 }").unwrap();
    assert_eq!(
        parsed.get("lst"),
        Some(&Value::List(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3)
        ]))
    );
    assert_eq!(dumps(&parsed).unwrap(), "lst :: list(num) { 1, 2, 3 }\n");
}

#[test]
fn test_nested_class() {
    let parsed = loads("o :: class { a :: bool { true } }").unwrap();
    assert_eq!(
        parsed,
        tree(vec![(
            "o",
            Value::Class(tree(vec![("a", Value::Bool(true))]))
        )])
    );
    assert_eq!(
        dumps(&parsed).unwrap(),
        "o :: class {\n    a :: bool { true }\n}\n"
    );
}

#[test]
fn test_key_overwrite_last_wins() {
    let parsed = loads("a :: num { 1 }\nb :: num { 0 }\na :: num { 2 }").unwrap();
    assert_eq!(parsed.get("a"), Some(&Value::Integer(2)));
    let keys: Vec<_> = parsed.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_keyword_number_and_string_keys() {
    let parsed = loads("class :: str { \"A\" }\n1 :: bool { no }\n\"my key\" :: num { 3 }").unwrap();
    assert_eq!(parsed.get("class"), Some(&Value::from("A")));
    assert_eq!(parsed.get("1"), Some(&Value::Bool(false)));
    assert_eq!(parsed.get("my key"), Some(&Value::Integer(3)));
}

#[test]
fn test_digit_led_identifier_key() {
    let parsed = loads("2fast :: num { 2 }").unwrap();
    assert_eq!(parsed.get("2fast"), Some(&Value::Integer(2)));
}

#[test]
fn test_empty_list_and_class() {
    let parsed = loads("l :: list(num) { }\nc :: class { }").unwrap();
    assert_eq!(parsed.get("l"), Some(&Value::List(vec![])));
    assert_eq!(parsed.get("c"), Some(&Value::Class(SclMap::new())));
    assert_eq!(
        dumps(&parsed).unwrap(),
        "l :: list(str) { }\nc :: class {\n\n}\n"
    );
}

#[test]
fn test_string_escapes() {
    let parsed = loads(r#"s :: str { "a\tb\nc \"q\" \\ \x" }"#).unwrap();
    assert_eq!(parsed.get("s"), Some(&Value::from("a\tb\nc \"q\" \\ x")));
}

#[test]
fn test_multiline_is_verbatim() {
    let parsed = loads("m :: ml {\n    'line one\n  line \\n two'\n}").unwrap();
    assert_eq!(parsed.get("m"), Some(&Value::from("line one\n  line \\n two")));
}

#[test]
fn test_entries_can_share_a_line() {
    let parsed = loads("a :: num { 1 } b :: num { 2 }").unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_empty_document() {
    assert!(loads("").unwrap().is_empty());
    assert!(loads("  [ only a comment ]\n\n").unwrap().is_empty());
    assert_eq!(dumps(&SclMap::new()).unwrap(), "\n");
}

// Errors

#[test]
fn test_empty_num_reports_closing_brace() {
    let err = loads("x :: num { }").unwrap_err();
    assert_eq!(
        err,
        Error::UnexpectedToken {
            line: 1,
            col: 12,
            expected: "NUMBER".to_string(),
            found: "}".to_string(),
        }
    );
}

#[test]
fn test_mixed_list_reports_offending_element() {
    let err = loads("lst :: list(num) { 1, \"x\" }").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((1, 23)));
}

#[test]
fn test_trailing_comma_is_rejected() {
    let err = loads("lst :: list(num) { 1, 2, }").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((1, 26)));
}

#[test]
fn test_unterminated_string_reports_start() {
    let err = loads("a :: num { 1 }\nb :: num { 2 }\nc :: \"oops").unwrap_err();
    assert_eq!(err, Error::UnterminatedString { line: 3, col: 6 });

    let err = loads("a :: num { 1 }\n\n    \"never closed").unwrap_err();
    assert_eq!(err, Error::UnterminatedString { line: 3, col: 5 });
}

#[test]
fn test_lexical_errors() {
    assert!(matches!(
        loads("[ open comment").unwrap_err(),
        Error::UnterminatedComment { line: 1, col: 1 }
    ));
    assert!(matches!(
        loads("m :: ml { 'open").unwrap_err(),
        Error::UnterminatedMultilineString { line: 1, col: 11 }
    ));
    assert!(matches!(
        loads("s :: str { \"abc\\").unwrap_err(),
        Error::UnterminatedEscape { .. }
    ));
    assert!(matches!(
        loads("x : num { 1 }").unwrap_err(),
        Error::UnexpectedCharacter { found: ':', line: 1, col: 3 }
    ));
    assert!(loads("x :: num { 1 }\n@").unwrap_err().is_lexical());
}

#[test]
fn test_unknown_type_keyword() {
    let err = loads("x :: integer { 1 }").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((1, 6)));
}

#[test]
fn test_list_element_type_must_be_scalar() {
    assert!(loads("x :: list(class) { }").unwrap_err().is_syntax());
    assert!(loads("x :: list(ml) { }").unwrap_err().is_syntax());
}

#[test]
fn test_serialize_mixed_list_names_key() {
    let map = tree(vec![(
        "mixed",
        Value::List(vec![Value::Integer(1), Value::from("x")]),
    )]);
    let err = dumps(&map).unwrap_err();
    assert_eq!(err, Error::inconsistent_list_type("mixed", "num"));
    assert!(err.to_string().contains("mixed"));
    assert_eq!(err.position(), None);
}

// Canonical output

#[test]
fn test_serialization_is_deterministic() {
    let text = "z :: num { 1 }\na :: class { m :: list(bool) { yes, no } }\nk :: fl { 0.5 }";
    let first = dumps(&loads(text).unwrap()).unwrap();
    let second = dumps(&loads(text).unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "z :: num { 1 }\na :: class {\n    m :: list(bool) { true, false }\n}\nk :: fl { 0.5 }\n"
    );
}

#[test]
fn test_round_trip_full_document() {
    let text = r#"
[ service definition ]
name :: str { "gateway" }
port :: num { 8080 }
ratio :: fl { 0.75 }
tls :: bool { yes }
hosts :: list(str) { "a.local", "b.local" }
weights :: list(fl) { 1, 2.5 }
limits :: class {
    burst :: num { 20 }
    nested :: class {
        deep :: bool { no }
    }
}
motd :: ml {
    'Welcome.
Be nice.'
}
"#;
    let parsed = loads(text).unwrap();
    let rendered = dumps(&parsed).unwrap();
    assert_eq!(loads(&rendered).unwrap(), parsed);
    assert_eq!(dumps(&loads(&rendered).unwrap()).unwrap(), rendered);
}

#[test]
fn test_indent_width_option() {
    let parsed = loads("a :: class { b :: class { c :: num { 1 } } }").unwrap();
    assert_eq!(
        dumps_with_options(&parsed, SclOptions::new().with_indent(1)).unwrap(),
        "a :: class {\n b :: class {\n  c :: num { 1 }\n }\n}\n"
    );
}

// Token stream

#[test]
fn test_tokenize_then_parse() {
    let tokens = tokenize("a :: num { 1 } [ note ]\n").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::DoubleColon,
            TokenKind::Num,
            TokenKind::LBrace,
            TokenKind::Integer,
            TokenKind::RBrace,
            TokenKind::Comment,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
    assert_eq!(parse(&tokens).unwrap().get("a"), Some(&Value::Integer(1)));
}
