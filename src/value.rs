//! Parsed TOML document tree.
//!
//! This module provides the [`TomlValue`] enum, the explicit tree a TOML document is
//! parsed into before flattening, and [`Scalar`], the leaf values that end up in a
//! [`PropertyMap`](crate::PropertyMap).
//!
//! ## Core Types
//!
//! - [`TomlValue`]: a table, an array, or a scalar leaf
//! - [`TomlTable`]: an insertion-ordered map of keys to values
//! - [`Scalar`]: string, integer, float, boolean, one of the four TOML date/time kinds,
//!   or null
//!
//! TOML has no null, so the parser never produces [`Scalar::Null`]. It exists for trees
//! built by hand or deserialized from another serde format.
//!
//! ## Examples
//!
//! ```rust
//! use toml_property_source::{parse_str, Scalar, TomlValue};
//!
//! let root = parse_str("[server]\nport = 8080").unwrap();
//! let server = root.get("server").unwrap();
//! assert!(server.is_table());
//! assert_eq!(server.get("port"), Some(&TomlValue::Scalar(Scalar::Integer(8080))));
//! ```

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use toml::value::{Date, Datetime, Offset, Time};
use tracing::debug;

/// An insertion-ordered TOML table.
pub type TomlTable = IndexMap<String, TomlValue>;

/// A node of a parsed TOML document.
///
/// # Examples
///
/// ```rust
/// use toml_property_source::{TomlValue, Scalar};
///
/// let leaf = TomlValue::from(42);
/// assert!(leaf.is_scalar());
/// assert_eq!(leaf.as_scalar(), Some(&Scalar::Integer(42)));
///
/// let list = TomlValue::from(vec![TomlValue::from("a"), TomlValue::from("b")]);
/// assert!(list.is_array());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum TomlValue {
    Table(TomlTable),
    Array(Vec<TomlValue>),
    Scalar(Scalar),
}

/// A leaf value of a TOML document.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    OffsetDateTime(DateTime<FixedOffset>),
    LocalDateTime(NaiveDateTime),
    LocalDate(NaiveDate),
    LocalTime(NaiveTime),
}

impl Scalar {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns `true` for any of the four date/time kinds.
    #[inline]
    #[must_use]
    pub const fn is_datetime(&self) -> bool {
        matches!(
            self,
            Scalar::OffsetDateTime(_)
                | Scalar::LocalDateTime(_)
                | Scalar::LocalDate(_)
                | Scalar::LocalTime(_)
        )
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_property_source::Scalar;
    ///
    /// assert_eq!(Scalar::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Scalar::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64` for floats and integers.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            Scalar::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the TOML name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::String(_) => "string",
            Scalar::Integer(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Boolean(_) => "boolean",
            Scalar::OffsetDateTime(_) => "offset datetime",
            Scalar::LocalDateTime(_) => "local datetime",
            Scalar::LocalDate(_) => "local date",
            Scalar::LocalTime(_) => "local time",
        }
    }
}

/// Renders the value the way a property consumer reads it: strings unquoted,
/// floats always with a fractional part or as `inf`/`nan`, date/times in TOML form.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::String(s) => f.write_str(s),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(fl) if fl.is_nan() => f.write_str("nan"),
            Scalar::Float(fl) if fl.is_infinite() => {
                f.write_str(if *fl > 0.0 { "inf" } else { "-inf" })
            }
            Scalar::Float(fl) => write!(f, "{:?}", fl),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::OffsetDateTime(dt) => {
                f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Scalar::LocalDateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Scalar::LocalDate(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Scalar::LocalTime(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
        }
    }
}

impl TomlValue {
    /// Returns an empty table.
    #[must_use]
    pub fn table() -> Self {
        TomlValue::Table(TomlTable::new())
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, TomlValue::Table(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, TomlValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, TomlValue::Scalar(_))
    }

    /// If the value is a table, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&TomlTable> {
        match self {
            TomlValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<TomlValue>> {
        match self {
            TomlValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a scalar leaf, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            TomlValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Looks up a direct member of a table. Returns `None` for arrays and scalars.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TomlValue> {
        self.as_table().and_then(|table| table.get(key))
    }

    /// Returns `true` for a table or array without members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            TomlValue::Table(table) => table.is_empty(),
            TomlValue::Array(arr) => arr.is_empty(),
            TomlValue::Scalar(_) => false,
        }
    }
}

impl From<toml::Value> for TomlValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => TomlValue::Scalar(Scalar::String(s)),
            toml::Value::Integer(i) => TomlValue::Scalar(Scalar::Integer(i)),
            toml::Value::Float(f) => TomlValue::Scalar(Scalar::Float(f)),
            toml::Value::Boolean(b) => TomlValue::Scalar(Scalar::Boolean(b)),
            toml::Value::Datetime(dt) => TomlValue::Scalar(Scalar::from(dt)),
            toml::Value::Array(arr) => {
                TomlValue::Array(arr.into_iter().map(TomlValue::from).collect())
            }
            toml::Value::Table(table) => TomlValue::from(table),
        }
    }
}

impl From<toml::Table> for TomlValue {
    fn from(table: toml::Table) -> Self {
        TomlValue::Table(
            table
                .into_iter()
                .map(|(key, value)| (key, TomlValue::from(value)))
                .collect(),
        )
    }
}

/// Date/times chrono cannot represent (such as a leap second written as `:60`)
/// are kept as their TOML text.
impl From<Datetime> for Scalar {
    fn from(datetime: Datetime) -> Self {
        let converted = match (datetime.date, datetime.time, datetime.offset) {
            (Some(date), Some(time), Some(offset)) => naive_date(date)
                .zip(naive_time(time))
                .zip(fixed_offset(offset))
                .and_then(|((d, t), o)| o.from_local_datetime(&d.and_time(t)).single())
                .map(Scalar::OffsetDateTime),
            (Some(date), Some(time), None) => naive_date(date)
                .zip(naive_time(time))
                .map(|(d, t)| Scalar::LocalDateTime(d.and_time(t))),
            (Some(date), None, None) => naive_date(date).map(Scalar::LocalDate),
            (None, Some(time), None) => naive_time(time).map(Scalar::LocalTime),
            _ => None,
        };

        converted.unwrap_or_else(|| {
            debug!(%datetime, "datetime not representable by chrono, keeping text");
            Scalar::String(datetime.to_string())
        })
    }
}

fn naive_date(date: Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )
}

fn naive_time(time: Time) -> Option<NaiveTime> {
    NaiveTime::from_hms_nano_opt(
        u32::from(time.hour),
        u32::from(time.minute),
        u32::from(time.second),
        time.nanosecond,
    )
}

fn fixed_offset(offset: Offset) -> Option<FixedOffset> {
    match offset {
        Offset::Z => FixedOffset::east_opt(0),
        Offset::Custom { minutes } => FixedOffset::east_opt(i32::from(minutes) * 60),
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::Boolean(b) => serializer.serialize_bool(*b),
            Scalar::OffsetDateTime(_)
            | Scalar::LocalDateTime(_)
            | Scalar::LocalDate(_)
            | Scalar::LocalTime(_) => serializer.collect_str(self),
        }
    }
}

impl Serialize for TomlValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TomlValue::Scalar(scalar) => scalar.serialize(serializer),
            TomlValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            TomlValue::Table(table) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (k, v) in table {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for TomlValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct TomlValueVisitor;

        impl<'de> Visitor<'de> for TomlValueVisitor {
            type Value = TomlValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a table, an array, or a scalar value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(TomlValue::Scalar(Scalar::Boolean(value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(TomlValue::Scalar(Scalar::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(TomlValue::Scalar(Scalar::Integer(i))),
                    Err(_) => Ok(TomlValue::Scalar(Scalar::Float(value as f64))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(TomlValue::Scalar(Scalar::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(TomlValue::Scalar(Scalar::String(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(TomlValue::Scalar(Scalar::String(value)))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(TomlValue::Scalar(Scalar::Null))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(TomlValue::Scalar(Scalar::Null))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(TomlValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut table = TomlTable::new();
                while let Some((key, value)) = map.next_entry::<String, TomlValue>()? {
                    table.insert(key, value);
                }
                Ok(TomlValue::Table(table))
            }
        }

        deserializer.deserialize_any(TomlValueVisitor)
    }
}

// TryFrom implementations for extracting typed values from a Scalar
impl TryFrom<Scalar> for i64 {
    type Error = crate::Error;

    fn try_from(value: Scalar) -> crate::Result<Self> {
        match value {
            Scalar::Integer(i) => Ok(i),
            other => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Scalar> for f64 {
    type Error = crate::Error;

    fn try_from(value: Scalar) -> crate::Result<Self> {
        value.as_f64().ok_or_else(|| {
            crate::Error::custom(format!("expected float, found {}", value.type_name()))
        })
    }
}

impl TryFrom<Scalar> for bool {
    type Error = crate::Error;

    fn try_from(value: Scalar) -> crate::Result<Self> {
        match value {
            Scalar::Boolean(b) => Ok(b),
            other => Err(crate::Error::custom(format!(
                "expected boolean, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Scalar> for String {
    type Error = crate::Error;

    fn try_from(value: Scalar) -> crate::Result<Self> {
        match value {
            Scalar::String(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected string, found {}",
                other.type_name()
            ))),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::Integer(i64::from(value))
                }
            }

            impl From<$ty> for TomlValue {
                fn from(value: $ty) -> Self {
                    TomlValue::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<f32> for TomlValue {
    fn from(value: f32) -> Self {
        TomlValue::Scalar(Scalar::from(value))
    }
}

impl From<f64> for TomlValue {
    fn from(value: f64) -> Self {
        TomlValue::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for TomlValue {
    fn from(value: bool) -> Self {
        TomlValue::Scalar(Scalar::Boolean(value))
    }
}

impl From<String> for TomlValue {
    fn from(value: String) -> Self {
        TomlValue::Scalar(Scalar::String(value))
    }
}

impl From<&str> for TomlValue {
    fn from(value: &str) -> Self {
        TomlValue::Scalar(Scalar::from(value))
    }
}

impl From<Scalar> for TomlValue {
    fn from(value: Scalar) -> Self {
        TomlValue::Scalar(value)
    }
}

impl From<Vec<TomlValue>> for TomlValue {
    fn from(value: Vec<TomlValue>) -> Self {
        TomlValue::Array(value)
    }
}

impl From<TomlTable> for TomlValue {
    fn from(value: TomlTable) -> Self {
        TomlValue::Table(value)
    }
}
