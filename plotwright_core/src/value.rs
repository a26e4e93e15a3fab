// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar values stored in datums.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::Datum;

/// A single field value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Missing value.
    #[default]
    Null,
    /// A number.
    Number(f64),
    /// A string, typically a category label.
    Text(Arc<str>),
    /// A point in time, in milliseconds since the Unix epoch.
    Date(f64),
    /// A nested record, reachable through dotted field paths.
    Record(Arc<Datum>),
}

impl Value {
    /// Creates a date value from milliseconds since the Unix epoch.
    pub fn date_ms(ms: f64) -> Self {
        Self::Date(ms)
    }

    /// Returns the numeric view of this value.
    ///
    /// Numbers and dates resolve to `f64`; non-finite numbers, text, records and nulls do not.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Number(v) | Self::Date(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Returns the text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested record, if this is a record value.
    pub fn as_record(&self) -> Option<&Datum> {
        match self {
            Self::Record(d) => Some(d),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(v) | Self::Date(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Record(d) => write!(f, "{{{} fields}}", d.len()),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(Arc::from(value))
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Self::Text(value)
    }
}

impl From<Datum> for Value {
    fn from(value: Datum) -> Self {
        Self::Record(Arc::new(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A hashable identity for categorical values.
///
/// Ordinal scales and keyed stacking compare values by this key. Numbers are keyed by their bit
/// pattern (with `-0.0` folded into `0.0`), so `1` and `1.0` are the same category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    /// A text category.
    Text(Arc<str>),
    /// A numeric category (`f64` bits).
    Number(u64),
    /// A date category (`f64` millisecond bits).
    Date(u64),
}

impl CategoryKey {
    /// Returns the category key for a value.
    ///
    /// Nulls, records and non-finite numbers have no category.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(Self::Text(s.clone())),
            Value::Number(v) if v.is_finite() => Some(Self::Number(float_bits(*v))),
            Value::Date(v) if v.is_finite() => Some(Self::Date(float_bits(*v))),
            _ => None,
        }
    }

    /// Converts the key back into a value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(s) => Value::Text(s.clone()),
            Self::Number(bits) => Value::Number(f64::from_bits(*bits)),
            Self::Date(bits) => Value::Date(f64::from_bits(*bits)),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_value(), f)
    }
}

fn float_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() }
}
