//! Ordered property map produced by flattening.
//!
//! [`PropertyMap`] wraps an [`IndexMap`] from path strings to [`Scalar`] values.
//! Iteration follows the depth-first order in which leaves appear in the source
//! document. Inserting a path that is already present replaces its value but keeps
//! its original position.
//!
//! ## Examples
//!
//! ```rust
//! use toml_property_source::{PropertyMap, Scalar};
//!
//! let mut map = PropertyMap::new();
//! map.insert("server.port".to_string(), Scalar::from(8080));
//! map.insert("server.host".to_string(), Scalar::from("localhost"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("server.host").and_then(|v| v.as_str()), Some("localhost"));
//! ```

use crate::Scalar;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// An ordered map of property paths to scalar values.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::{PropertyMap, Scalar};
///
/// let mut map = PropertyMap::new();
/// map.insert("b".to_string(), Scalar::from(1));
/// map.insert("a".to_string(), Scalar::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyMap(IndexMap<String, Scalar>);

impl PropertyMap {
    /// Creates an empty `PropertyMap`.
    #[must_use]
    pub fn new() -> Self {
        PropertyMap(IndexMap::new())
    }

    /// Creates an empty `PropertyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropertyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a path-value pair into the map.
    ///
    /// If the map already contained this path, the old value is returned and the
    /// path keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_property_source::{PropertyMap, Scalar};
    ///
    /// let mut map = PropertyMap::new();
    /// assert!(map.insert("key".to_string(), Scalar::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Scalar::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, path: String, value: Scalar) -> Option<Scalar> {
        self.0.insert(path, value)
    }

    /// Returns a reference to the value stored under the path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Scalar> {
        self.0.get(path)
    }

    #[must_use]
    pub fn contains_key(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Returns the number of properties in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the paths of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Scalar> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Scalar> {
        self.0.values()
    }

    /// Returns an iterator over the path-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Scalar> {
        self.0.iter()
    }
}

impl From<PropertyMap> for HashMap<String, Scalar> {
    fn from(map: PropertyMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, Scalar);
    type IntoIter = indexmap::map::IntoIter<String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = indexmap::map::Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Scalar)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, Scalar)>>(iter: T) -> Self {
        PropertyMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for PropertyMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}
