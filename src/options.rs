//! Configuration options for flattening.
//!
//! This module provides types to customize how a tree becomes a property map:
//!
//! - [`FlattenOptions`]: Main configuration struct
//! - [`BracketKeys`]: How literal keys starting with `[` are joined
//!
//! ## Examples
//!
//! ```rust
//! use toml_property_source::{parse_str, flatten_with_options, FlattenOptions};
//!
//! let root = parse_str("name = 'svc'").unwrap();
//! let options = FlattenOptions::new().with_null_placeholder("<unset>");
//! let properties = flatten_with_options(&root, &options);
//! assert_eq!(properties.len(), 1);
//! ```

/// Joining policy for table keys whose text begins with `[`.
///
/// Array indices are always appended without a dot. A literal key such as
/// `"[x]"` in the source is indistinguishable from an index marker under
/// [`BracketKeys::Append`], which is the default.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::{toml_value, flatten_with_options, BracketKeys, FlattenOptions};
///
/// let root = toml_value!({ "a": { "[x]": 1 } });
///
/// let appended = flatten_with_options(&root, &FlattenOptions::new());
/// assert!(appended.contains_key("a[x]"));
///
/// let dotted = FlattenOptions::new().with_bracket_keys(BracketKeys::Dotted);
/// assert!(flatten_with_options(&root, &dotted).contains_key("a.[x]"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BracketKeys {
    #[default]
    Append,
    Dotted,
}

/// Configuration options for flattening.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::{BracketKeys, FlattenOptions};
///
/// let options = FlattenOptions::new();
/// assert_eq!(options.null_placeholder, "");
/// assert_eq!(options.bracket_keys, BracketKeys::Append);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    /// String stored for null leaves. Empty by default.
    pub null_placeholder: String,
    pub bracket_keys: BracketKeys,
}

impl FlattenOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string stored in place of null values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_property_source::FlattenOptions;
    ///
    /// let options = FlattenOptions::new().with_null_placeholder("~");
    /// assert_eq!(options.null_placeholder, "~");
    /// ```
    #[must_use]
    pub fn with_null_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.null_placeholder = placeholder.into();
        self
    }

    /// Sets the joining policy for literal keys starting with `[`.
    #[must_use]
    pub fn with_bracket_keys(mut self, bracket_keys: BracketKeys) -> Self {
        self.bracket_keys = bracket_keys;
        self
    }
}
