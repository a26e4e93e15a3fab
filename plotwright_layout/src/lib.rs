// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout composition for sibling series.
//!
//! This crate computes per-series [`OffsetDescriptor`]s before any geometry is built:
//! - [`compose_stack`] accumulates values so stacked bars/areas sit atop one another,
//!   with positive and negative values stacking independently around zero.
//! - [`compose_group`] spreads series evenly across a group width so side-by-side bars do not
//!   overlap.
//!
//! It also provides [`sort_dataset`] for reordering data by a key before layout.
//!
//! Every function is a pure computation over its inputs.

#![no_std]

extern crate alloc;

mod group;
mod offset;
mod sort;
mod stack;

pub use group::{compose_group, compose_group_spaced, group_offsets};
pub use offset::{OffsetDescriptor, StackOffsets};
pub use sort::{SortOrder, sort_dataset, sort_series};
pub use stack::{StackAlignment, compose_stack};
