//! Property source loaders for TOML resources.
//!
//! A host configuration framework routes files by extension ([`FILE_EXTENSIONS`]) and
//! asks a loader to turn a [`Resource`] into named [`PropertySource`]s. Two contracts
//! are supported:
//!
//! - [`PropertySourceLoader::load`] returns zero or one sources in a `Vec`.
//! - [`ProfilePropertySourceLoader::load_profile`] returns an optional source and
//!   yields `None` for any requested profile, since a TOML file is a single document.
//!
//! Both report an empty document as "nothing loaded" rather than as an error.
//!
//! ## Examples
//!
//! ```rust
//! use toml_property_source::loader::{
//!     BytesResource, PropertySourceLoader, TomlPropertySourceLoader,
//! };
//!
//! let resource = BytesResource::new("inline", "[test]\nfoo = 42");
//! let sources = TomlPropertySourceLoader::new().load("app", &resource).unwrap();
//!
//! assert_eq!(sources.len(), 1);
//! assert_eq!(sources[0].get_string("test.foo").as_deref(), Some("42"));
//! ```

use crate::{
    flatten_with_options, parse_slice, Error, FlattenOptions, PropertyMap, Result, Scalar,
};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extensions, without the leading `.`, handled by [`TomlPropertySourceLoader`].
pub const FILE_EXTENSIONS: &[&str] = &["toml"];

/// A readable source of bytes, such as a file on disk.
pub trait Resource {
    /// Human-readable identification used in logs and errors.
    fn description(&self) -> String;

    /// Opens a fresh reader over the resource contents.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// A resource backed by a file path.
#[derive(Clone, Debug)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileResource { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn description(&self) -> String {
        format!("file [{}]", self.path.display())
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// An in-memory resource.
#[derive(Clone, Debug)]
pub struct BytesResource {
    name: String,
    bytes: Vec<u8>,
}

impl BytesResource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        BytesResource {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl Resource for BytesResource {
    fn description(&self) -> String {
        format!("bytes [{}]", self.name)
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}

/// A named, ordered set of properties loaded from one resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySource {
    name: String,
    properties: PropertyMap,
}

impl PropertySource {
    pub fn new(name: impl Into<String>, properties: PropertyMap) -> Self {
        PropertySource {
            name: name.into(),
            properties,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Scalar> {
        self.properties.get(path)
    }

    /// Returns the property rendered as text, the form most consumers bind from.
    #[must_use]
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).map(Scalar::to_string)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.properties.contains_key(path)
    }

    /// Property paths in source order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[must_use]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    #[must_use]
    pub fn into_properties(self) -> PropertyMap {
        self.properties
    }
}

/// Loads a resource into a list of property sources.
pub trait PropertySourceLoader {
    /// Extensions, without the leading `.`, this loader handles.
    fn file_extensions(&self) -> &[&'static str];

    /// Loads `resource` under `name`. Returns an empty list when there is nothing to load.
    fn load(&self, name: &str, resource: &dyn Resource) -> Result<Vec<PropertySource>>;

    /// Returns `true` if the path's extension is one of [`file_extensions`](Self::file_extensions),
    /// compared ASCII case-insensitively.
    fn can_load(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.file_extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// Loads a resource for an optional profile.
pub trait ProfilePropertySourceLoader {
    /// Loads `resource` under `name` for `profile`. Returns `None` when there is
    /// nothing to load for that profile.
    fn load_profile(
        &self,
        name: &str,
        resource: &dyn Resource,
        profile: Option<&str>,
    ) -> Result<Option<PropertySource>>;
}

/// Loads TOML resources as flat property sources.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::loader::{
///     BytesResource, ProfilePropertySourceLoader, TomlPropertySourceLoader,
/// };
///
/// let loader = TomlPropertySourceLoader::new();
/// let resource = BytesResource::new("inline", "a = 1");
///
/// assert!(loader.load_profile("app", &resource, None).unwrap().is_some());
/// assert!(loader.load_profile("app", &resource, Some("dev")).unwrap().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TomlPropertySourceLoader {
    options: FlattenOptions,
}

impl TomlPropertySourceLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: FlattenOptions) -> Self {
        TomlPropertySourceLoader { options }
    }

    #[must_use]
    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    fn read_properties(&self, resource: &dyn Resource) -> Result<PropertyMap> {
        let description = resource.description();
        debug!(resource = %description, "reading toml resource");

        let mut bytes = Vec::new();
        resource
            .open()
            .and_then(|mut reader| reader.read_to_end(&mut bytes))
            .map_err(|e| Error::io(&description, &e))?;

        let root = parse_slice(&bytes)?;
        Ok(flatten_with_options(&root, &self.options))
    }
}

impl PropertySourceLoader for TomlPropertySourceLoader {
    fn file_extensions(&self) -> &[&'static str] {
        FILE_EXTENSIONS
    }

    fn load(&self, name: &str, resource: &dyn Resource) -> Result<Vec<PropertySource>> {
        let properties = self.read_properties(resource)?;
        if properties.is_empty() {
            debug!(source = name, "toml resource has no properties");
            return Ok(Vec::new());
        }

        info!(source = name, entries = properties.len(), "loaded toml property source");
        Ok(vec![PropertySource::new(name, properties)])
    }
}

impl ProfilePropertySourceLoader for TomlPropertySourceLoader {
    fn load_profile(
        &self,
        name: &str,
        resource: &dyn Resource,
        profile: Option<&str>,
    ) -> Result<Option<PropertySource>> {
        if let Some(profile) = profile {
            debug!(source = name, profile, "toml has no profile documents, skipping");
            return Ok(None);
        }

        let properties = self.read_properties(resource)?;
        if properties.is_empty() {
            debug!(source = name, "toml resource has no properties");
            return Ok(None);
        }

        info!(source = name, entries = properties.len(), "loaded toml property source");
        Ok(Some(PropertySource::new(name, properties)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fails every open.
    struct Unreadable;

    impl Resource for Unreadable {
        fn description(&self) -> String {
            "unreadable".to_string()
        }

        fn open(&self) -> io::Result<Box<dyn Read + '_>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_file_extensions() {
        let loader = TomlPropertySourceLoader::new();
        assert_eq!(loader.file_extensions(), &["toml"]);
        assert!(loader.can_load(Path::new("config/application.toml")));
        assert!(loader.can_load(Path::new("APP.TOML")));
        assert!(!loader.can_load(Path::new("application.yaml")));
        assert!(!loader.can_load(Path::new("toml")));
    }

    #[test]
    fn test_load_empty_document() {
        let loader = TomlPropertySourceLoader::new();
        let resource = BytesResource::new("empty", "# only a comment\n");
        assert!(loader.load("app", &resource).unwrap().is_empty());
        assert!(loader.load_profile("app", &resource, None).unwrap().is_none());
    }

    #[test]
    fn test_load_only_empty_tables() {
        let loader = TomlPropertySourceLoader::new();
        let resource = BytesResource::new("tables", "[a]\n[b.c]\n");
        assert!(loader.load("app", &resource).unwrap().is_empty());
    }

    #[test]
    fn test_profile_short_circuits_before_reading() {
        let loader = TomlPropertySourceLoader::new();
        let result = loader.load_profile("app", &Unreadable, Some("prod"));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let loader = TomlPropertySourceLoader::new();
        match loader.load("app", &Unreadable) {
            Err(Error::Io { resource, msg }) => {
                assert_eq!(resource, "unreadable");
                assert!(msg.contains("denied"));
            }
            other => panic!("Expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let loader = TomlPropertySourceLoader::new();
        let resource = BytesResource::new("bin", vec![b'a', b'=', 0xff]);
        assert!(matches!(
            loader.load("app", &resource),
            Err(Error::Utf8(_))
        ));
    }

    #[test]
    fn test_source_accessors() {
        let loader = TomlPropertySourceLoader::new();
        let resource = BytesResource::new("inline", "b = 'x'\na = 1.5");
        let source = loader
            .load_profile("props", &resource, None)
            .unwrap()
            .unwrap();

        assert_eq!(source.name(), "props");
        assert_eq!(source.len(), 2);
        assert!(source.contains("a"));
        assert_eq!(source.property_names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(source.get_string("a").as_deref(), Some("1.5"));
        assert_eq!(source.get("b"), Some(&Scalar::from("x")));
        assert_eq!(source.into_properties().len(), 2);
    }

    #[test]
    fn test_options_are_applied() {
        let options = FlattenOptions::new().with_null_placeholder("-");
        let loader = TomlPropertySourceLoader::with_options(options.clone());
        assert_eq!(loader.options(), &options);
    }
}
