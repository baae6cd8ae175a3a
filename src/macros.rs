/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become classes (keys keep their written order), arrays become lists, and
/// any other expression goes through `Value::from`.
///
/// ```rust
/// use serde_scl::{dumps, scl, Value};
///
/// let value = scl!({
///     "name": "web",
///     "ports": [80, 443],
///     "tls": { "enabled": true }
/// });
///
/// if let Value::Class(tree) = value {
///     assert_eq!(
///         dumps(&tree).unwrap(),
///         "name :: str { \"web\" }\n\
///          ports :: list(num) { 80, 443 }\n\
///          tls :: class {\n    enabled :: bool { true }\n}\n"
///     );
/// }
/// ```
#[macro_export]
macro_rules! scl {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::scl!($elem)),*])
    };

    ({}) => {
        $crate::Value::Class($crate::SclMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut class = $crate::SclMap::new();
        $(
            class.insert($key.to_string(), $crate::scl!($value));
        )*
        $crate::Value::Class(class)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}
