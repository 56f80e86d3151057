// File: crates/weather-core/src/observation.rs
// Summary: Observation record and the immutable Dataset loaded once per session.

use chrono::{Datelike, NaiveDate};

/// City identifier as it appears in the source table (trimmed).
pub type CityId = String;

/// One row of the dataset. `temperature` is NaN when the source field was
/// missing or not numeric.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub city: CityId,
    pub temperature: f64,
    pub precipitation: Option<f64>,
}

impl Observation {
    pub fn new(date: NaiveDate, city: impl Into<CityId>, temperature: f64) -> Self {
        Self { date, city: city.into(), temperature, precipitation: None }
    }

    pub fn with_precipitation(mut self, precipitation: f64) -> Self {
        self.precipitation = Some(precipitation);
        self
    }

    /// True when the temperature can be drawn and matched by the tooltip.
    #[inline]
    pub fn has_temperature(&self) -> bool { self.temperature.is_finite() }

    /// Day number used as the horizontal coordinate.
    #[inline]
    pub fn day(&self) -> f64 { day_number(self.date) }
}

/// Days since 0001-01-01 (proleptic Gregorian) as a float.
#[inline]
pub fn day_number(date: NaiveDate) -> f64 { date.num_days_from_ce() as f64 }

/// Ordered rows, immutable after load. Filtering always produces new vectors.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<Observation>,
}

impl Dataset {
    pub fn new(rows: Vec<Observation>) -> Self { Self { rows } }

    pub fn empty() -> Self { Self::default() }

    pub fn rows(&self) -> &[Observation] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Distinct city ids in order of first appearance.
    pub fn cities(&self) -> Vec<CityId> {
        let mut out: Vec<CityId> = Vec::new();
        for r in &self.rows {
            if !out.iter().any(|c| c == &r.city) {
                out.push(r.city.clone());
            }
        }
        out
    }

    /// Earliest and latest date over all rows.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_extent(self.rows.iter())
    }

    /// Rows whose city is accepted by `keep`, in dataset order.
    pub fn filter<'a, F>(&'a self, mut keep: F) -> Vec<&'a Observation>
    where
        F: FnMut(&str) -> bool,
    {
        self.rows.iter().filter(|r| keep(&r.city)).collect()
    }
}

pub(crate) fn date_extent<'a, I>(rows: I) -> Option<(NaiveDate, NaiveDate)>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut it = rows.into_iter();
    let first = it.next()?;
    let (mut lo, mut hi) = (first.date, first.date);
    for r in it {
        lo = lo.min(r.date);
        hi = hi.max(r.date);
    }
    Some((lo, hi))
}

/// Min/max over finite temperatures; `None` when every value is NaN.
pub(crate) fn temperature_extent<'a, I>(rows: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for r in rows {
        if r.has_temperature() {
            lo = lo.min(r.temperature);
            hi = hi.max(r.temperature);
        }
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}
