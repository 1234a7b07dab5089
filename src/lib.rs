//! # toml_property_source
//!
//! Load TOML documents as flat, ordered property sources.
//!
//! Hierarchical configuration consumers look properties up by path: `server.port`,
//! `datasource.replicas[1].url`. This crate parses a TOML document into an explicit
//! tree ([`TomlValue`]) and flattens it into a single-level [`PropertyMap`] using that
//! path convention, keeping the order in which leaves appear in the document.
//!
//! ## Quick Start
//!
//! ```rust
//! use toml_property_source::{from_str, Scalar};
//!
//! let properties = from_str(r#"
//! [server]
//! host = "localhost"
//! ports = [8080, 8443]
//!
//! [[users]]
//! name = "alice"
//! "#).unwrap();
//!
//! let keys: Vec<_> = properties.keys().cloned().collect();
//! assert_eq!(keys, vec!["server.host", "server.ports[0]", "server.ports[1]", "users[0].name"]);
//! assert_eq!(properties.get("server.ports[1]"), Some(&Scalar::Integer(8443)));
//! ```
//!
//! ## Loading Resources
//!
//! The [`loader`] module wraps parsing and flattening behind the two loader contracts
//! a host framework calls, keyed by the `toml` file extension:
//!
//! ```rust
//! use toml_property_source::loader::{
//!     BytesResource, PropertySourceLoader, TomlPropertySourceLoader,
//! };
//!
//! let loader = TomlPropertySourceLoader::new();
//! let sources = loader.load("app", &BytesResource::new("inline", "")).unwrap();
//! assert!(sources.is_empty());
//! ```
//!
//! ## Path Convention
//!
//! See [`path`] for the joining rules. Null leaves, which only hand-built trees can
//! contain, are stored as the empty string (configurable through [`FlattenOptions`]).
//!
//! ## Logging
//!
//! Loading and flattening emit `tracing` events at `debug` and `info` level. No
//! subscriber is installed by this crate.

pub mod error;
pub mod flatten;
pub mod loader;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{flatten, flatten_with_options};
pub use loader::{
    ProfilePropertySourceLoader, PropertySource, PropertySourceLoader, TomlPropertySourceLoader,
    FILE_EXTENSIONS,
};
pub use map::PropertyMap;
pub use options::{BracketKeys, FlattenOptions};
pub use value::{Scalar, TomlTable, TomlValue};

use std::io;

/// Parses a TOML document into a [`TomlValue::Table`], keeping key order.
///
/// # Errors
///
/// Returns [`Error::Parse`] with line and column information if the document is
/// not valid TOML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(s: &str) -> Result<TomlValue> {
    let table: toml::Table = toml::from_str(s).map_err(|e| Error::from_toml(&e, s))?;
    Ok(TomlValue::from(table))
}

/// Parses UTF-8 encoded TOML bytes into a [`TomlValue::Table`].
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8, or [`Error::Parse`] if
/// they are not valid TOML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<TomlValue> {
    let s = std::str::from_utf8(v).map_err(Error::utf8)?;
    parse_str(s)
}

/// Parses and flattens a TOML document.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::from_str;
///
/// let properties = from_str("[a.b]\nc = 'x'").unwrap();
/// assert_eq!(properties.get("a.b.c").and_then(|v| v.as_str()), Some("x"));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<PropertyMap> {
    parse_str(s).map(|root| flatten(&root))
}

/// Parses and flattens TOML bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid TOML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<PropertyMap> {
    parse_slice(v).map(|root| flatten(&root))
}

/// Reads, parses and flattens a TOML document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::from_reader;
/// use std::io::Cursor;
///
/// let properties = from_reader(Cursor::new(b"list = [true, false]")).unwrap();
/// assert_eq!(properties.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, or the input is not valid UTF-8 or TOML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<PropertyMap>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io("reader", &e))?;
    from_slice(&bytes)
}
