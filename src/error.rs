//! Error types for loading TOML property sources.
//!
//! Only reading and parsing can fail. Flattening a parsed tree is infallible, and an
//! empty document is reported by the loaders as "nothing loaded" rather than as an error.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the resource could not be opened or read
//! - **Parse Errors**: malformed TOML, with 1-based line/column information
//! - **UTF-8 Errors**: the input bytes are not valid UTF-8
//! - **Custom Errors**: value conversions that do not fit the requested type
//!
//! ## Examples
//!
//! ```rust
//! use toml_property_source::{from_str, Error};
//!
//! let result = from_str("name = ");
//! assert!(matches!(result, Err(Error::Parse { line: 1, .. })));
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while reading and parsing a TOML source.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The resource could not be opened or read
    #[error("IO error reading {resource}: {msg}")]
    Io { resource: String, msg: String },

    /// Malformed TOML. `line` and `col` are 1-based, or 0 when the parser gave no position.
    #[error("TOML parse error at line {line}, column {col}: {msg}")]
    Parse { line: usize, col: usize, msg: String },

    /// Input was not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for the named resource.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_property_source::Error;
    /// use std::io;
    ///
    /// let err = Error::io("app.toml", &io::Error::new(io::ErrorKind::NotFound, "missing"));
    /// assert!(err.to_string().contains("app.toml"));
    /// ```
    pub fn io(resource: &str, err: &io::Error) -> Self {
        Error::Io {
            resource: resource.to_string(),
            msg: err.to_string(),
        }
    }

    /// Creates a parse error with line and column information.
    pub fn parse(line: usize, col: usize, msg: &str) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Converts a `toml` parser error, resolving its byte span against `source`.
    pub fn from_toml(err: &toml::de::Error, source: &str) -> Self {
        let msg = err.message().trim_end();
        match err.span() {
            Some(span) => {
                let (line, col) = line_col(source, span.start);
                Error::parse(line, col, msg)
            }
            None => Error::parse(0, 0, msg),
        }
    }

    /// Creates a UTF-8 decoding error.
    pub fn utf8<T: fmt::Display>(msg: T) -> Self {
        Error::Utf8(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_property_source::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let col = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, col)
}

pub type Result<T> = std::result::Result<T, Error>;
