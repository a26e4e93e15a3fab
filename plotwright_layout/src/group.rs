// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-by-side group layout.

extern crate alloc;

use alloc::vec::Vec;

use crate::offset::OffsetDescriptor;

/// Returns `count` evenly spaced center offsets within `[-group_width / 2, group_width / 2]`,
/// each shifted by `nudge`.
///
/// Member `i` is centered in the `i`-th of `count` equal slots, so the offsets are symmetric
/// around `nudge` and adjacent members are `group_width / count` apart. A single member gets
/// exactly `nudge`.
pub fn group_offsets(count: usize, group_width: f64, nudge: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let slot = group_width / n;
    let start = -0.5 * group_width;
    (0..count)
        .map(|i| start + (i as f64 + 0.5) * slot + nudge)
        .collect()
}

/// Computes group offsets for the members of a group, in order.
///
/// Only the number of members matters; a member can be a single series or a whole stack.
/// Returns one [`OffsetDescriptor::Group`] per member.
pub fn compose_group<T>(members: &[T], group_width: f64, nudge: f64) -> Vec<OffsetDescriptor> {
    log::debug!(
        "composing group of {} members over {group_width}px",
        members.len()
    );
    group_offsets(members.len(), group_width, nudge)
        .into_iter()
        .map(|offset| OffsetDescriptor::Group { offset })
        .collect()
}

/// Computes group offsets so adjacent member centers are `spacing` pixels apart.
///
/// This is [`compose_group`] with a group width of `spacing * count`.
pub fn compose_group_spaced(count: usize, spacing: f64) -> Vec<OffsetDescriptor> {
    group_offsets(count, spacing * count as f64, 0.0)
        .into_iter()
        .map(|offset| OffsetDescriptor::Group { offset })
        .collect()
}
