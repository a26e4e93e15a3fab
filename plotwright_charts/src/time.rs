// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation for time scales.
//!
//! Times are millisecond timestamps. Steps snap to familiar calendar-free units: seconds,
//! minutes, hours and whole days.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

const STEPS_MS: &[f64] = &[
    SECOND,
    2.0 * SECOND,
    5.0 * SECOND,
    15.0 * SECOND,
    30.0 * SECOND,
    MINUTE,
    5.0 * MINUTE,
    15.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    7.0 * DAY,
];

/// Returns tick timestamps (milliseconds) covering `[min, max]` with roughly `count` steps.
///
/// Sub-second spans fall back to evenly spaced ticks at the endpoints.
pub fn nice_time_ticks_ms(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }

    let step = nice_time_step_ms((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let first = (min / step).ceil();
    let last = (max / step).floor();
    let n_f = last - first;
    if !(n_f.is_finite() && n_f >= 0.0) {
        return alloc::vec![min, max];
    }
    let n = {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    };
    (0..=n).map(|i| (first + i as f64) * step).collect()
}

fn nice_time_step_ms(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 || step < SECOND * 0.5 {
        return 0.0;
    }
    if let Some(&s) = STEPS_MS.iter().find(|&&s| s >= step) {
        return s;
    }
    (step / DAY).ceil() * DAY
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn minute_spans_use_minute_steps() {
        let ticks = nice_time_ticks_ms(0.0, 10.0 * MINUTE, 5);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks[1] - ticks[0], 5.0 * MINUTE);
    }

    #[test]
    fn ticks_stay_inside_the_domain() {
        let min = 1_700_000_123_456.0;
        let max = min + 3.0 * DAY;
        let ticks = nice_time_ticks_ms(min, max, 4);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| (min..=max).contains(t)));
        assert!(ticks.iter().all(|t| t % DAY == 0.0));
    }

    #[test]
    fn very_long_spans_round_up_to_whole_days() {
        assert_eq!(nice_time_step_ms(20.0 * DAY), 20.0 * DAY);
        assert_eq!(nice_time_step_ms(3.5 * DAY), 7.0 * DAY);
    }
}
