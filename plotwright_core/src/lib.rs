// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data model for `plotwright`.
//!
//! Charts consume plain, nested data:
//! - a [`Dataset`] is an ordered, immutable list of [`Datum`]s,
//! - a [`Datum`] maps field names to [`Value`]s,
//! - an [`Accessor`] resolves a visual [`Channel`] (x, y, q1, ...) to a value for one datum.
//!
//! A [`Series`] bundles a dataset with its per-channel [`Accessors`]; this is the unit that
//! domain computation, stacking, grouping and geometry building operate on.
//!
//! All errors raised by the engine share the [`Error`] taxonomy defined here.

#![no_std]

extern crate alloc;

mod accessor;
mod datum;
mod error;
mod series;
mod value;

pub use accessor::{Accessor, Accessors, Channel};
pub use datum::{Dataset, Datum};
pub use error::{Error, Result};
pub use series::Series;
pub use value::{CategoryKey, Value};
