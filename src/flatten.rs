//! Flattening of a parsed tree into a [`PropertyMap`].
//!
//! The traversal is depth-first and order-preserving. It runs on an explicit
//! work-list of `(node, path)` pairs, so document depth never grows the call stack.
//! Children are pushed in reverse so they pop in source order.

use crate::path::{child_path, index_path};
use crate::{FlattenOptions, PropertyMap, Scalar, TomlValue};
use tracing::debug;

/// Flattens `root` with default options.
///
/// Every scalar leaf becomes exactly one entry. Tables and arrays never appear as
/// values, and null leaves are stored as the empty string.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::{flatten, parse_str, Scalar};
///
/// let root = parse_str("[a.b]\nc = 'x'\n[[items]]\nname = 'first'").unwrap();
/// let properties = flatten(&root);
///
/// let keys: Vec<_> = properties.keys().cloned().collect();
/// assert_eq!(keys, vec!["a.b.c", "items[0].name"]);
/// assert_eq!(properties.get("a.b.c"), Some(&Scalar::from("x")));
/// ```
#[must_use]
pub fn flatten(root: &TomlValue) -> PropertyMap {
    flatten_with_options(root, &FlattenOptions::default())
}

/// Flattens `root` with custom options.
///
/// A scalar root, which a TOML document never produces, is stored under the
/// empty path.
#[must_use]
pub fn flatten_with_options(root: &TomlValue, options: &FlattenOptions) -> PropertyMap {
    let mut properties = PropertyMap::new();
    let mut pending: Vec<(&TomlValue, String)> = vec![(root, String::new())];

    while let Some((node, path)) = pending.pop() {
        match node {
            TomlValue::Table(table) => {
                for (key, child) in table.iter().rev() {
                    pending.push((child, child_path(&path, key, options.bracket_keys)));
                }
            }
            TomlValue::Array(elements) => {
                for (index, element) in elements.iter().enumerate().rev() {
                    pending.push((element, index_path(&path, index)));
                }
            }
            TomlValue::Scalar(scalar) => {
                let value = match scalar {
                    Scalar::Null => Scalar::String(options.null_placeholder.clone()),
                    other => other.clone(),
                };
                if properties.contains_key(&path) {
                    debug!(%path, "property path produced twice, keeping later value");
                }
                properties.insert(path, value);
            }
        }
    }

    debug!(entries = properties.len(), "flattened toml tree");
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{toml_value, BracketKeys};

    fn keys(properties: &PropertyMap) -> Vec<&str> {
        properties.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_table() {
        assert!(flatten(&TomlValue::table()).is_empty());
    }

    #[test]
    fn test_flat() {
        let properties = flatten(&toml_value!({ "foo": 42 }));
        assert_eq!(properties.get("foo"), Some(&Scalar::Integer(42)));
        assert_eq!(properties.len(), 1);
    }

    #[test]
    fn test_nested_tables() {
        let properties = flatten(&toml_value!({ "a": { "b": { "c": "x" } } }));
        assert_eq!(keys(&properties), vec!["a.b.c"]);
        assert_eq!(properties.get("a.b.c"), Some(&Scalar::from("x")));
    }

    #[test]
    fn test_array_of_scalars() {
        let properties = flatten(&toml_value!({ "list": [1, 2, 3] }));
        assert_eq!(keys(&properties), vec!["list[0]", "list[1]", "list[2]"]);
        assert_eq!(properties.get("list[2]"), Some(&Scalar::Integer(3)));
    }

    #[test]
    fn test_array_of_tables() {
        let properties = flatten(&toml_value!({
            "items": [{ "name": "a" }, { "name": "b" }]
        }));
        assert_eq!(keys(&properties), vec!["items[0].name", "items[1].name"]);
        assert_eq!(properties.get("items[1].name"), Some(&Scalar::from("b")));
    }

    #[test]
    fn test_nested_arrays() {
        let properties = flatten(&toml_value!({ "m": [[1, 2], [3]] }));
        assert_eq!(keys(&properties), vec!["m[0][0]", "m[0][1]", "m[1][0]"]);
    }

    #[test]
    fn test_depth_first_order() {
        let properties = flatten(&toml_value!({
            "z": 1,
            "a": { "y": 2, "b": [3, { "k": 4 }] },
            "c": 5
        }));
        assert_eq!(keys(&properties), vec!["z", "a.y", "a.b[0]", "a.b[1].k", "c"]);
    }

    #[test]
    fn test_null_becomes_placeholder() {
        let root = toml_value!({ "x": null });
        assert_eq!(flatten(&root).get("x"), Some(&Scalar::from("")));

        let options = FlattenOptions::new().with_null_placeholder("none");
        assert_eq!(
            flatten_with_options(&root, &options).get("x"),
            Some(&Scalar::from("none"))
        );
    }

    #[test]
    fn test_empty_containers_produce_nothing() {
        let properties = flatten(&toml_value!({ "t": {}, "l": [], "v": true }));
        assert_eq!(keys(&properties), vec!["v"]);
    }

    #[test]
    fn test_literal_bracket_key() {
        let root = toml_value!({ "a": { "[x]": 1, "y": 2 } });
        assert_eq!(keys(&flatten(&root)), vec!["a[x]", "a.y"]);

        let options = FlattenOptions::new().with_bracket_keys(BracketKeys::Dotted);
        assert_eq!(
            keys(&flatten_with_options(&root, &options)),
            vec!["a.[x]", "a.y"]
        );
    }

    #[test]
    fn test_colliding_paths_keep_first_position() {
        // "a.b" as a quoted key and a.b as a nested key name the same property
        let root = toml_value!({ "a.b": 1, "c": 2, "a": { "b": 3 } });
        let properties = flatten(&root);
        assert_eq!(keys(&properties), vec!["a.b", "c"]);
        assert_eq!(properties.get("a.b"), Some(&Scalar::Integer(3)));
    }

    #[test]
    fn test_scalar_root() {
        let properties = flatten(&TomlValue::from("alone"));
        assert_eq!(properties.get(""), Some(&Scalar::from("alone")));
    }

    #[test]
    fn test_deeply_nested_arrays() {
        let mut root = TomlValue::from(1);
        for _ in 0..2_000 {
            root = TomlValue::Array(vec![root]);
        }
        let properties = flatten(&TomlValue::Table(
            [("deep".to_string(), root)].into_iter().collect(),
        ));
        assert_eq!(properties.len(), 1);
        let path = properties.keys().next().unwrap();
        assert_eq!(path.len(), "deep".len() + 2_000 * "[0]".len());
    }

    #[test]
    fn test_reflatten_is_stable() {
        let root = toml_value!({ "b": [1, { "c": 2 }], "a": "x" });
        let first = flatten(&root);
        let second = flatten(&root);
        assert_eq!(keys(&first), keys(&second));
        assert_eq!(first, second);
    }
}
