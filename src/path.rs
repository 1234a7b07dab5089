//! Property path convention.
//!
//! Flattened keys use the convention of hierarchical property consumers:
//!
//! ```text
//! [server]
//! host = "localhost"        server.host
//!
//! [[servers]]
//! name = "a"                servers[0].name
//!
//! ports = [80, 443]         ports[0], ports[1]
//! ```
//!
//! **Rules**:
//! - A table member is joined to its parent path with `.`.
//! - An array element is joined as `[i]`, zero-based in source order, with no
//!   separator before the bracket.
//! - A member whose key itself starts with `[` is joined like an index, without a
//!   dot, unless [`BracketKeys::Dotted`] is requested.
//! - An empty or whitespace-only parent path contributes no prefix, so top-level
//!   keys appear as-is.

use crate::BracketKeys;

/// Joins a table member `key` onto `parent`.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::{path::child_path, BracketKeys};
///
/// assert_eq!(child_path("", "server", BracketKeys::Append), "server");
/// assert_eq!(child_path("server", "port", BracketKeys::Append), "server.port");
/// assert_eq!(child_path("list", "[2]", BracketKeys::Append), "list[2]");
/// assert_eq!(child_path("list", "[2]", BracketKeys::Dotted), "list.[2]");
/// ```
#[must_use]
pub fn child_path(parent: &str, key: &str, bracket_keys: BracketKeys) -> String {
    if is_blank(parent) {
        key.to_string()
    } else if bracket_keys == BracketKeys::Append && key.starts_with('[') {
        format!("{}{}", parent, key)
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Joins the array element at `index` onto `parent`.
///
/// ```rust
/// use toml_property_source::path::index_path;
///
/// assert_eq!(index_path("ports", 1), "ports[1]");
/// assert_eq!(index_path("", 0), "[0]");
/// ```
#[must_use]
pub fn index_path(parent: &str, index: usize) -> String {
    if is_blank(parent) {
        format!("[{}]", index)
    } else {
        format!("{}[{}]", parent, index)
    }
}

fn is_blank(path: &str) -> bool {
    path.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_parent_is_no_prefix() {
        assert_eq!(child_path("  ", "a", BracketKeys::Append), "a");
        assert_eq!(index_path(" ", 3), "[3]");
    }

    #[test]
    fn test_nested_index_then_key() {
        let element = index_path("items", 0);
        assert_eq!(child_path(&element, "name", BracketKeys::Append), "items[0].name");
    }

    #[test]
    fn test_dotted_policy_only_affects_bracket_keys() {
        assert_eq!(child_path("a", "b", BracketKeys::Dotted), "a.b");
        assert_eq!(child_path("", "[x]", BracketKeys::Dotted), "[x]");
    }
}
