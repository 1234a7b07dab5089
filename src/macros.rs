/// Builds a [`TomlValue`](crate::TomlValue) tree from a JSON-like literal.
///
/// Keys are string literals and keep the order they are written in. `null` builds a
/// [`Scalar::Null`](crate::Scalar::Null) leaf, which TOML itself cannot express.
/// Negative numbers and other multi-token expressions must be parenthesized.
///
/// ```rust
/// use toml_property_source::{toml_value, flatten};
///
/// let root = toml_value!({
///     "server": { "port": 8080, "offset": (-1) },
///     "tags": ["a", "b"]
/// });
/// assert_eq!(flatten(&root).len(), 4);
/// ```
#[macro_export]
macro_rules! toml_value {
    // Handle null
    (null) => {
        $crate::TomlValue::Scalar($crate::Scalar::Null)
    };

    (true) => {
        $crate::TomlValue::Scalar($crate::Scalar::Boolean(true))
    };

    (false) => {
        $crate::TomlValue::Scalar($crate::Scalar::Boolean(false))
    };

    // Handle empty array
    ([]) => {
        $crate::TomlValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::TomlValue::Array(vec![$($crate::toml_value!($elem)),*])
    };

    // Handle empty table
    ({}) => {
        $crate::TomlValue::table()
    };

    // Handle non-empty table
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::TomlTable::new();
        $(
            table.insert($key.to_string(), $crate::toml_value!($value));
        )*
        $crate::TomlValue::Table(table)
    }};

    // Any other expression with a `From` conversion into TomlValue
    ($s:expr) => {
        $crate::TomlValue::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Scalar, TomlTable, TomlValue};

    #[test]
    fn test_toml_value_macro_primitives() {
        assert_eq!(toml_value!(null), TomlValue::Scalar(Scalar::Null));
        assert_eq!(toml_value!(true), TomlValue::Scalar(Scalar::Boolean(true)));
        assert_eq!(toml_value!(false), TomlValue::Scalar(Scalar::Boolean(false)));
        assert_eq!(toml_value!(42), TomlValue::Scalar(Scalar::Integer(42)));
        assert_eq!(toml_value!(3.5), TomlValue::Scalar(Scalar::Float(3.5)));
        assert_eq!(toml_value!((-7)), TomlValue::Scalar(Scalar::Integer(-7)));
        assert_eq!(
            toml_value!("hello"),
            TomlValue::Scalar(Scalar::String("hello".to_string()))
        );
    }

    #[test]
    fn test_toml_value_macro_arrays() {
        assert_eq!(toml_value!([]), TomlValue::Array(vec![]));

        let arr = toml_value!([1, "two", null]);
        match arr {
            TomlValue::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], TomlValue::from(1));
                assert_eq!(vec[1], TomlValue::from("two"));
                assert_eq!(vec[2], TomlValue::Scalar(Scalar::Null));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_toml_value_macro_tables() {
        assert_eq!(toml_value!({}), TomlValue::Table(TomlTable::new()));

        let table = toml_value!({
            "name": "Alice",
            "age": 30,
        });

        match table {
            TomlValue::Table(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["name", "age"]);
                assert_eq!(map.get("age"), Some(&TomlValue::from(30)));
            }
            _ => panic!("Expected table"),
        }
    }
}
