use serde::{Deserialize, Serialize};
use serde_scl::{
    dumps, from_reader, from_str, from_value, loads, to_string, to_string_with_options, to_value,
    to_writer, Error, SclOptions, Value,
};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: BTreeMap<String, Product>,
    total: f64,
}

fn sample_order() -> Order {
    let mut items = BTreeMap::new();
    items.insert(
        "first".to_string(),
        Product {
            sku: "WIDGET-001".to_string(),
            price: 29.99,
            quantity: 2,
        },
    );
    items.insert(
        "second".to_string(),
        Product {
            sku: "GADGET-002".to_string(),
            price: 49.99,
            quantity: 1,
        },
    );
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items,
        total: 109.97,
    }
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let scl = to_string(&user).unwrap();
    assert_eq!(
        scl,
        "id :: num { 123 }\n\
         name :: str { \"Alice\" }\n\
         active :: bool { true }\n\
         tags :: list(str) { \"admin\", \"developer\" }\n"
    );

    let user_back: User = from_str(&scl).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = sample_order();

    let scl = to_string(&order).unwrap();
    assert!(scl.contains("customer :: class {\n    id :: num { 123 }"));
    assert!(scl.contains("items :: class {\n    first :: class {\n        sku :: str"));

    let order_back: Order = from_str(&scl).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_custom_indent() {
    let order = sample_order();
    let scl = to_string_with_options(&order, SclOptions::new().with_indent(2)).unwrap();
    assert!(scl.contains("customer :: class {\n  id :: num { 123 }"));

    let order_back: Order = from_str(&scl).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_list_of_classes_is_rejected() {
    #[derive(Serialize)]
    struct Cart {
        items: Vec<Product>,
    }

    let cart = Cart {
        items: vec![Product {
            sku: "A".to_string(),
            price: 1.0,
            quantity: 1,
        }],
    };

    match to_string(&cart) {
        Err(Error::UnsupportedValue { key, .. }) => assert_eq!(key, "items"),
        other => panic!("expected UnsupportedValue, got {:?}", other),
    }
}

#[test]
fn test_optional_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Settings {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        timeout: Option<u32>,
    }

    let with = Settings {
        name: "a".to_string(),
        timeout: Some(30),
    };
    let without = Settings {
        name: "b".to_string(),
        timeout: None,
    };

    let scl = to_string(&without).unwrap();
    assert_eq!(scl, "name :: str { \"b\" }\n");

    assert_eq!(from_str::<Settings>(&to_string(&with).unwrap()).unwrap(), with);
    assert_eq!(from_str::<Settings>(&scl).unwrap(), without);
}

#[test]
fn test_none_without_skip_fails() {
    #[derive(Serialize)]
    struct Loose {
        value: Option<i32>,
    }

    let err = to_string(&Loose { value: None }).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(_)));
}

#[test]
fn test_enums() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Backend {
        Memory,
        Disk { path: String, sync: bool },
        Remote(String),
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Store {
        primary: Backend,
        secondary: Backend,
        cache: Backend,
    }

    let store = Store {
        primary: Backend::Disk {
            path: "/var/data".to_string(),
            sync: true,
        },
        secondary: Backend::Remote("db.local".to_string()),
        cache: Backend::Memory,
    };

    let scl = to_string(&store).unwrap();
    assert!(scl.contains("cache :: str { \"Memory\" }"));
    let back: Store = from_str(&scl).unwrap();
    assert_eq!(store, back);
}

#[test]
fn test_multiline_field() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Banner {
        text: String,
    }

    let banner = Banner {
        text: "Welcome\nto the server".to_string(),
    };
    let scl = to_string(&banner).unwrap();
    assert_eq!(scl, "text :: ml {\n    'Welcome\nto the server'\n}\n");
    assert_eq!(from_str::<Banner>(&scl).unwrap(), banner);
}

#[test]
fn test_to_value() {
    let user = User {
        id: 1,
        name: "Bob".to_string(),
        active: false,
        tags: vec![],
    };
    let value = to_value(&user).unwrap();
    assert_eq!(value.get("id"), Some(&Value::Integer(1)));
    assert_eq!(value.get("tags"), Some(&Value::List(vec![])));

    let back: User = from_value(value).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_writer_and_reader() {
    let order = sample_order();
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &order).unwrap();

    let back: Order = from_reader(buffer.as_slice()).unwrap();
    assert_eq!(back, order);
}

#[test]
fn test_float_field_accepts_integer_literal() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Ratio {
        value: f64,
    }

    let ratio: Ratio = from_str("value :: fl { 5 }").unwrap();
    assert_eq!(ratio, Ratio { value: 5.0 });
}

#[test]
fn test_type_mismatch_is_reported() {
    #[derive(Deserialize, Debug)]
    struct Port {
        #[allow(dead_code)]
        port: u16,
    }

    assert!(from_str::<Port>("port :: str { \"80\" }").is_err());
}

#[test]
fn test_syntax_error_from_serde_entry() {
    #[derive(Deserialize, Debug)]
    struct Anything {
        #[allow(dead_code)]
        x: i64,
    }

    let err = from_str::<Anything>("x :: num { }").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((1, 12)));
}

#[test]
fn test_comments_are_dropped() {
    let text = "[ header ]\nname :: str { \"svc\" } [ trailing ]\n";
    let tree = loads(text).unwrap();
    assert_eq!(dumps(&tree).unwrap(), "name :: str { \"svc\" }\n");
}

#[test]
fn test_cross_check_with_json() {
    let order = sample_order();
    let via_scl: Order = from_str(&to_string(&order).unwrap()).unwrap();
    assert_eq!(
        serde_json::to_value(&via_scl).unwrap(),
        serde_json::to_value(&order).unwrap()
    );
}
