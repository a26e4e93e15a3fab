// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual channels and the accessors that resolve them.

extern crate alloc;

use alloc::sync::Arc;
use core::fmt;

use hashbrown::HashMap;

use crate::{Datum, Value};

/// A visual channel read from each datum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Position along the categorical or independent axis.
    X,
    /// Value along the dependent axis.
    Y,
    /// Explicit baseline along the dependent axis.
    Y0,
    /// Box-plot minimum.
    Min,
    /// Box-plot maximum.
    Max,
    /// Box-plot median.
    Median,
    /// Box-plot first quartile.
    Q1,
    /// Box-plot third quartile.
    Q3,
    /// Any other named channel (labels, sort keys, ...).
    Custom(Arc<str>),
}

impl Channel {
    /// The five box-plot statistic channels, in ascending order.
    pub const SUMMARY: [Self; 5] = [Self::Min, Self::Q1, Self::Median, Self::Q3, Self::Max];

    /// Returns the channel name, which is also its default field name.
    pub fn name(&self) -> &str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Y0 => "y0",
            Self::Min => "min",
            Self::Max => "max",
            Self::Median => "median",
            Self::Q1 => "q1",
            Self::Q3 => "q3",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a value from a datum.
#[derive(Clone)]
pub enum Accessor {
    /// Always the same value, regardless of the datum.
    Constant(Value),
    /// A dot-separated field path (`"y"`, `"stats.median"`).
    Field(Arc<str>),
    /// An arbitrary function of the datum.
    Function(Arc<dyn Fn(&Datum) -> Value + Send + Sync>),
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Field(path) => f.debug_tuple("Field").field(path).finish(),
            Self::Function(_) => f.debug_tuple("Function").field(&"<fn>").finish(),
        }
    }
}

impl Accessor {
    /// Creates a constant accessor.
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Constant(value.into())
    }

    /// Creates a field-path accessor.
    pub fn field(path: impl Into<Arc<str>>) -> Self {
        Self::Field(path.into())
    }

    /// Creates a function accessor.
    pub fn function(f: impl Fn(&Datum) -> Value + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }

    /// Resolves the accessor against a datum.
    ///
    /// Missing fields resolve to [`Value::Null`].
    pub fn resolve(&self, datum: &Datum) -> Value {
        match self {
            Self::Constant(v) => v.clone(),
            Self::Field(path) => datum.get_path(path).cloned().unwrap_or_default(),
            Self::Function(f) => f(datum),
        }
    }
}

impl From<&str> for Accessor {
    fn from(value: &str) -> Self {
        Self::field(value)
    }
}

/// Per-channel accessor overrides.
///
/// Channels without an override read the field named after the channel, so
/// `{x: "apples", y: 3}` works without any configuration.
#[derive(Clone, Debug, Default)]
pub struct Accessors {
    overrides: HashMap<Channel, Accessor>,
}

impl Accessors {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the accessor for `channel`.
    pub fn with(mut self, channel: Channel, accessor: impl Into<Accessor>) -> Self {
        self.overrides.insert(channel, accessor.into());
        self
    }

    /// Returns the override for `channel`, if any.
    pub fn get(&self, channel: &Channel) -> Option<&Accessor> {
        self.overrides.get(channel)
    }

    /// Resolves `channel` for a datum.
    pub fn resolve(&self, channel: &Channel, datum: &Datum) -> Value {
        match self.overrides.get(channel) {
            Some(accessor) => accessor.resolve(datum),
            None => datum.get_path(channel.name()).cloned().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::datum;

    #[test]
    fn channels_default_to_their_field_name() {
        let d = datum! { "x" => "apples", "y" => 3 };
        let acc = Accessors::new();
        assert_eq!(acc.resolve(&Channel::Y, &d), Value::from(3));
        assert_eq!(acc.resolve(&Channel::Y0, &d), Value::Null);
    }

    #[test]
    fn overrides_cover_constants_paths_and_functions() {
        let d = datum! { "count" => 4, "nested" => datum! { "v" => 9 } };
        let acc = Accessors::new()
            .with(Channel::X, Accessor::constant("all"))
            .with(Channel::Y, "nested.v")
            .with(
                Channel::Y0,
                Accessor::function(|d| {
                    Value::from(d.get("count").and_then(Value::as_f64).map(|v| v / 2.0))
                }),
            );
        assert_eq!(acc.resolve(&Channel::X, &d), Value::from("all"));
        assert_eq!(acc.resolve(&Channel::Y, &d), Value::from(9));
        assert_eq!(acc.resolve(&Channel::Y0, &d), Value::from(2.0));
    }
}
