// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy shared by every `plotwright` crate.
//!
//! Errors are raised at the point of detection and returned to the caller unchanged. Nothing in
//! the engine recovers from, retries, or silently corrects a failed computation.

use crate::{CategoryKey, Channel};

/// Result alias using [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by domain, scale, layout and geometry computations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// No values could be resolved for a channel across all datasets.
    #[error("no resolvable values for channel `{channel}`")]
    EmptyDataset {
        /// The channel that was inspected.
        channel: Channel,
    },

    /// An explicit domain was not ordered (or not finite).
    #[error("invalid domain: [{min}, {max}]")]
    InvalidDomain {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },

    /// A continuous scale was given a zero-width domain.
    #[error("degenerate domain: min and max are both {value}")]
    DegenerateDomain {
        /// The collapsed domain value.
        value: f64,
    },

    /// Series that must be paired datum-by-datum have different lengths.
    #[error("series {series} has {found} datums, expected {expected}")]
    SeriesLengthMismatch {
        /// Index of the offending series.
        series: usize,
        /// Expected datum count.
        expected: usize,
        /// Actual datum count.
        found: usize,
    },

    /// A keyed stack could not resolve an alignment key for a datum.
    #[error("datum {index} of series {series} has no usable alignment key")]
    UnresolvableKey {
        /// Index of the offending series.
        series: usize,
        /// Index of the offending datum within that series.
        index: usize,
    },

    /// A keyed stack found more than one datum for the same key within one series.
    #[error("series {series} has more than one datum at alignment key `{key}`")]
    AmbiguousAlignment {
        /// Index of the offending series.
        series: usize,
        /// The duplicated key.
        key: CategoryKey,
    },

    /// Box-plot statistics are not ordered `min <= q1 <= median <= q3 <= max`.
    #[error(
        "datum {index} has out-of-order summary statistics \
         (min {min}, q1 {q1}, median {median}, q3 {q3}, max {max})"
    )]
    InvalidSummaryStatistics {
        /// Index of the offending datum.
        index: usize,
        /// Resolved minimum.
        min: f64,
        /// Resolved first quartile.
        q1: f64,
        /// Resolved median.
        median: f64,
        /// Resolved third quartile.
        q3: f64,
        /// Resolved maximum.
        max: f64,
    },

    /// An ordinal scale was given no categories.
    #[error("ordinal scale has no categories")]
    NoCategories,

    /// A required channel resolved to a value the scale cannot map.
    #[error("datum {index} has no mappable value for channel `{channel}`")]
    UnmappableValue {
        /// The channel that failed to map.
        channel: Channel,
        /// Index of the offending datum.
        index: usize,
    },
}

impl Error {
    /// Attributes a per-series error to series `series` of a larger batch.
    ///
    /// Rewrites the series index of [`Error::SeriesLengthMismatch`]; other errors are returned
    /// as they are.
    #[must_use]
    pub fn in_series(self, series: usize) -> Self {
        match self {
            Self::SeriesLengthMismatch {
                expected, found, ..
            } => Self::SeriesLengthMismatch {
                series,
                expected,
                found,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_failing_channel_and_datum() {
        let e = Error::EmptyDataset { channel: Channel::Q1 };
        assert_eq!(e.to_string(), "no resolvable values for channel `q1`");

        let e = Error::UnmappableValue {
            channel: Channel::Y,
            index: 2,
        };
        assert_eq!(e.to_string(), "datum 2 has no mappable value for channel `y`");
    }

    #[test]
    fn in_series_attributes_length_mismatches_only() {
        let e = Error::SeriesLengthMismatch {
            series: 0,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            e.in_series(4),
            Error::SeriesLengthMismatch {
                series: 4,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Error::NoCategories.in_series(4), Error::NoCategories);
    }
}
