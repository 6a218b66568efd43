/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Elements and members accept nested literals; any other expression must
/// be a single token tree (parenthesize it) and converts via
/// `Value::from`, so an existing `Value` passes through unchanged.
///
/// ```rust
/// use snug_json::snug;
///
/// let event = snug!({
///     "kind": "deploy",
///     "ok": true,
///     "attempts": [1, 2, 3],
///     "region": null
/// });
/// assert!(event.is_object());
/// ```
#[macro_export]
macro_rules! snug {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::snug!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::snug!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other single-token-tree expression
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_snug_macro_primitives() {
        assert_eq!(snug!(null), Value::Null);
        assert_eq!(snug!(true), Value::Bool(true));
        assert_eq!(snug!(false), Value::Bool(false));
        assert_eq!(snug!(42), Value::Number(Number::Integer(42)));
        assert_eq!(snug!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(snug!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_snug_macro_arrays() {
        assert_eq!(snug!([]), Value::Array(vec![]));

        let arr = snug!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_snug_macro_objects() {
        assert_eq!(snug!({}), Value::Object(Map::new()));

        let obj = snug!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_snug_macro_value_passthrough() {
        let marker = Value::Undefined;
        assert_eq!(snug!((marker)), Value::Undefined);
        assert_eq!(snug!(("a".repeat(3))), Value::String("aaa".to_string()));
    }
}
