// Copyright 2025 the Plotwright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale construction and mapping.
//!
//! A [`ScaleSpec`] describes a domain (and options) without a range; [`ScaleSpec::instantiate`]
//! binds it to an output range and yields a [`Scale`]. Scales are plain values: mapping is pure
//! and they can be copied into as many geometry builders as needed.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use plotwright_core::{Error, Result, Value};

use crate::domain::{Categories, Domain};
use crate::time;

/// The family of a scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Continuous linear scale.
    Linear,
    /// Continuous time scale over millisecond timestamps.
    Time,
    /// Discrete band scale over categories.
    Ordinal,
}

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Debug)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Continuous time scale.
    Time(ScaleTimeSpec),
    /// Discrete ordinal scale.
    Ordinal(ScaleOrdinalSpec),
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleTimeSpec> for ScaleSpec {
    fn from(value: ScaleTimeSpec) -> Self {
        Self::Time(value)
    }
}

impl From<ScaleOrdinalSpec> for ScaleSpec {
    fn from(value: ScaleOrdinalSpec) -> Self {
        Self::Ordinal(value)
    }
}

impl ScaleSpec {
    /// Returns the scale family.
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear(_) => ScaleKind::Linear,
            Self::Time(_) => ScaleKind::Time,
            Self::Ordinal(_) => ScaleKind::Ordinal,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> Result<Scale> {
        match self {
            Self::Linear(s) => s.instantiate(range).map(Scale::Linear),
            Self::Time(s) => s.instantiate(range).map(Scale::Time),
            Self::Ordinal(s) => s.instantiate(range).map(Scale::Ordinal),
        }
    }
}

/// Creates a scale mapping `spec`'s domain onto `range`.
pub fn create_scale(spec: impl Into<ScaleSpec>, range: (f64, f64)) -> Result<Scale> {
    let spec = spec.into();
    let scale = spec.instantiate(range)?;
    log::trace!("{:?} scale onto [{}, {}]", spec.kind(), range.0, range.1);
    Ok(scale)
}

/// A scale instance.
#[derive(Clone, Debug)]
pub enum Scale {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Time scale.
    Time(ScaleTime),
    /// Ordinal scale.
    Ordinal(ScaleOrdinal),
}

impl Scale {
    /// Returns the scale family.
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear(_) => ScaleKind::Linear,
            Self::Time(_) => ScaleKind::Time,
            Self::Ordinal(_) => ScaleKind::Ordinal,
        }
    }

    /// Maps a data value into range space.
    ///
    /// Continuous scales accept numbers and dates; ordinal scales accept any value of a known
    /// category. Returns `None` for values the scale cannot place.
    pub fn map(&self, value: &Value) -> Option<f64> {
        match self {
            Self::Linear(s) => value.as_f64().map(|v| s.map(v)),
            Self::Time(s) => value.as_f64().map(|v| s.map(v)),
            Self::Ordinal(s) => s.map(value),
        }
    }

    /// Maps a number into range space (for ordinal scales, the number is a category).
    pub fn map_f64(&self, v: f64) -> Option<f64> {
        self.map(&Value::Number(v))
    }

    /// Maps a range value back into domain space, for continuous scales.
    pub fn invert(&self, y: f64) -> Option<f64> {
        match self {
            Self::Linear(s) => Some(s.invert(y)),
            Self::Time(s) => Some(s.invert(y)),
            Self::Ordinal(_) => None,
        }
    }

    /// Returns the band width for ordinal scales and `0` for continuous ones.
    pub fn bandwidth(&self) -> f64 {
        match self {
            Self::Ordinal(s) => s.bandwidth(),
            Self::Linear(_) | Self::Time(_) => 0.0,
        }
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Time(s) => s.range(),
            Self::Ordinal(s) => s.range(),
        }
    }

    /// Returns the domain of a continuous scale.
    pub fn continuous_domain(&self) -> Option<Domain> {
        match self {
            Self::Linear(s) => Some(s.domain()),
            Self::Time(s) => Some(s.domain()),
            Self::Ordinal(_) => None,
        }
    }

    /// Returns tick positions in domain space (category centers in range space for ordinal).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Time(s) => s.ticks(count),
            Self::Ordinal(s) => s.centers(),
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: Domain,
    range: (f64, f64),
    clamp: bool,
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: Domain,
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
    /// Whether out-of-domain values are clamped to the range ends.
    pub clamp: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    ///
    /// Fails with [`Error::DegenerateDomain`] if the domain has zero width.
    pub fn new(domain: Domain, range: (f64, f64)) -> Result<Self> {
        if domain.span() == 0.0 {
            return Err(Error::DegenerateDomain {
                value: domain.min(),
            });
        }
        Ok(Self {
            domain,
            range,
            clamp: false,
        })
    }

    /// Enables or disables clamping to the range ends.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Maps a value from domain space into range space.
    ///
    /// Domain endpoints map exactly onto range endpoints. Values outside the domain extrapolate
    /// linearly unless clamping is enabled.
    pub fn map(&self, x: f64) -> f64 {
        let (r0, r1) = self.range;
        let mut t = (x - self.domain.min()) / self.domain.span();
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        if t == 1.0 {
            return r1;
        }
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return self.domain.min();
        }
        let mut t = (y - r0) / denom;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        self.domain.min() * (1.0 - t) + self.domain.max() * t
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.min(), self.domain.max(), count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            nice: false,
            clamp: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Enables or disables clamping.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> Domain {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.min(), self.domain.max(), tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(&first), Some(&last)) if ticks.len() >= 2 => {
                Domain::new(first, last).unwrap_or(self.domain)
            }
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    ///
    /// When `nice` is set, the domain is extended to the nearest ticks (for ten ticks).
    pub fn instantiate(&self, range: (f64, f64)) -> Result<ScaleLinear> {
        Ok(ScaleLinear::new(self.resolved_domain(10), range)?.with_clamp(self.clamp))
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A time scale: a linear scale over millisecond timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

/// Specification for a time scale (domain, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTimeSpec {
    /// Domain in milliseconds since the Unix epoch.
    pub domain: Domain,
    /// Whether out-of-domain values are clamped to the range ends.
    pub clamp: bool,
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: Domain, range: (f64, f64)) -> Result<Self> {
        Ok(Self {
            inner: ScaleLinear::new(domain, range)?,
        })
    }

    /// Enables or disables clamping to the range ends.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.inner = self.inner.with_clamp(clamp);
        self
    }

    /// Maps a timestamp into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Maps a range value back to a timestamp.
    pub fn invert(&self, y: f64) -> f64 {
        self.inner.invert(y)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> Domain {
        self.inner.domain()
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    /// Returns “nice-ish” tick timestamps for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let d = self.inner.domain();
        time::nice_time_ticks_ms(d.min(), d.max(), count)
    }
}

impl ScaleTimeSpec {
    /// Creates a new time scale spec.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            clamp: false,
        }
    }

    /// Enables or disables clamping.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> Result<ScaleTime> {
        Ok(ScaleTime::new(self.domain, range)?.with_clamp(self.clamp))
    }
}

/// A discrete scale that splits its range into one equal band per category.
///
/// Each category maps to the center of its band. Band order follows category insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOrdinal {
    categories: Categories,
    range: (f64, f64),
}

/// Specification for an ordinal scale (categories, no range yet).
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOrdinalSpec {
    /// Categories in band order.
    pub categories: Categories,
}

impl ScaleOrdinal {
    /// Creates a new ordinal scale.
    ///
    /// Fails with [`Error::NoCategories`] if there are no categories.
    pub fn new(categories: Categories, range: (f64, f64)) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::NoCategories);
        }
        Ok(Self { categories, range })
    }

    /// Returns the band step (signed, following the range direction).
    fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        (r1 - r0) / self.categories.len() as f64
    }

    /// Returns the center of band `index`.
    pub fn map_index(&self, index: usize) -> f64 {
        self.range.0 + (index as f64 + 0.5) * self.step()
    }

    /// Maps a category value to its band center.
    pub fn map(&self, value: &Value) -> Option<f64> {
        self.categories.index_of(value).map(|i| self.map_index(i))
    }

    /// Returns the (unsigned) band width.
    pub fn bandwidth(&self) -> f64 {
        self.step().abs()
    }

    /// Returns every band center, in category order.
    pub fn centers(&self) -> Vec<f64> {
        (0..self.categories.len())
            .map(|i| self.map_index(i))
            .collect()
    }

    /// Returns the categories.
    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

impl ScaleOrdinalSpec {
    /// Creates a new ordinal scale spec.
    pub fn new(categories: Categories) -> Self {
        Self { categories }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> Result<ScaleOrdinal> {
        ScaleOrdinal::new(self.categories.clone(), range)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn linear(d0: f64, d1: f64, r0: f64, r1: f64) -> ScaleLinear {
        ScaleLinear::new(Domain::new(d0, d1).unwrap(), (r0, r1)).unwrap()
    }

    #[test]
    fn linear_maps_endpoints_exactly() {
        let s = linear(0.1, 0.7, 0.3, 299.9);
        assert_eq!(s.map(0.1), 0.3);
        assert_eq!(s.map(0.7), 299.9);
    }

    #[test]
    fn linear_supports_descending_ranges() {
        let s = linear(0.0, 7.0, 300.0, 0.0);
        assert_eq!(s.map(0.0), 300.0);
        assert_eq!(s.map(7.0), 0.0);
        assert!(s.map(3.0) > s.map(5.0));
    }

    #[test]
    fn linear_extrapolates_unless_clamped() {
        let s = linear(0.0, 10.0, 0.0, 100.0);
        assert_eq!(s.map(20.0), 200.0);
        assert_eq!(s.with_clamp(true).map(20.0), 100.0);
        assert_eq!(s.with_clamp(true).map(-5.0), 0.0);
    }

    #[test]
    fn linear_invert_round_trips() {
        let s = linear(10.0, 20.0, 100.0, 0.0);
        assert!((s.invert(s.map(13.0)) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn zero_width_domain_is_rejected() {
        let err = ScaleLinear::new(Domain::new(4.0, 4.0).unwrap(), (0.0, 1.0)).unwrap_err();
        assert_eq!(err, Error::DegenerateDomain { value: 4.0 });
    }

    #[test]
    fn nice_spec_extends_domain_to_ticks() {
        let spec = ScaleLinearSpec::new(Domain::new(0.3, 9.2).unwrap()).with_nice(true);
        let d = spec.resolved_domain(10);
        assert_eq!((d.min(), d.max()), (0.0, 10.0));
    }

    #[test]
    fn ordinal_maps_categories_to_band_centers_in_insertion_order() {
        let cats: Categories = ["b", "a", "c"].into_iter().collect();
        let s = ScaleOrdinal::new(cats, (0.0, 300.0)).unwrap();
        assert_eq!(s.map(&Value::from("b")), Some(50.0));
        assert_eq!(s.map(&Value::from("a")), Some(150.0));
        assert_eq!(s.map(&Value::from("c")), Some(250.0));
        assert_eq!(s.map(&Value::from("z")), None);
        assert_eq!(s.bandwidth(), 100.0);
    }

    #[test]
    fn ordinal_needs_categories() {
        let err = ScaleOrdinal::new(Categories::default(), (0.0, 300.0)).unwrap_err();
        assert_eq!(err, Error::NoCategories);
    }

    #[test]
    fn ordinal_follows_descending_ranges() {
        let cats: Categories = [1, 2].into_iter().collect();
        let s = ScaleOrdinal::new(cats, (200.0, 0.0)).unwrap();
        assert_eq!(s.centers(), alloc::vec![150.0, 50.0]);
    }

    #[test]
    fn scale_map_rejects_values_of_the_wrong_shape() {
        let s = create_scale(
            ScaleLinearSpec::new(Domain::new(0.0, 1.0).unwrap()),
            (0.0, 10.0),
        )
        .unwrap();
        assert_eq!(s.map(&Value::from("text")), None);
        assert_eq!(s.map(&Value::date_ms(0.5)), Some(5.0));
        assert_eq!(s.kind(), ScaleKind::Linear);
    }

    const DAY_MS: f64 = 86_400_000.0;
    const T0: f64 = 1_700_000_000_000.0;

    fn one_day(clamp: bool) -> Scale {
        let spec = ScaleTimeSpec::new(Domain::new(T0, T0 + DAY_MS).unwrap()).with_clamp(clamp);
        create_scale(spec, (0.0, 480.0)).unwrap()
    }

    #[test]
    fn time_maps_dates_onto_the_range() {
        let s = one_day(false);
        assert_eq!(s.kind(), ScaleKind::Time);
        assert_eq!(s.map(&Value::date_ms(T0)), Some(0.0));
        assert_eq!(s.map(&Value::date_ms(T0 + DAY_MS)), Some(480.0));
        assert_eq!(s.map(&Value::date_ms(T0 + 0.5 * DAY_MS)), Some(240.0));
        assert_eq!(s.map(&Value::from("noon")), None);
    }

    #[test]
    fn time_extrapolates_unless_clamped() {
        let late = Value::date_ms(T0 + 2.0 * DAY_MS);
        let early = Value::date_ms(T0 - DAY_MS);
        assert_eq!(one_day(false).map(&late), Some(960.0));
        assert_eq!(one_day(true).map(&late), Some(480.0));
        assert_eq!(one_day(true).map(&early), Some(0.0));
    }

    #[test]
    fn time_invert_returns_timestamps() {
        let s = one_day(false);
        assert_eq!(s.invert(0.0), Some(T0));
        assert_eq!(s.invert(240.0), Some(T0 + 0.5 * DAY_MS));
        let back = s.invert(s.map(&Value::date_ms(T0 + 3_600_000.0)).unwrap()).unwrap();
        assert!((back - (T0 + 3_600_000.0)).abs() < 1e-3, "round trip gave {back}");
    }
}
