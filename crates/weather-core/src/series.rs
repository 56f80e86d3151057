// File: crates/weather-core/src/series.rs
// Summary: Per-city series: grouping filtered rows, date ordering, and NaN-broken path layout.

use crate::observation::{CityId, Observation};
use crate::scale::Scales;
use crate::scene::SeriesPath;
use crate::types::Rgba;

/// Observations of one city in ascending date order.
#[derive(Clone, Debug, PartialEq)]
pub struct CitySeries {
    pub city: CityId,
    pub points: Vec<Observation>,
}

impl CitySeries {
    /// Build from unordered rows of a single city; the sort is stable so
    /// same-day rows keep their dataset order.
    pub fn new(city: impl Into<CityId>, mut points: Vec<Observation>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { city: city.into(), points }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Maximal runs of points with a finite temperature.
    pub fn defined_runs(&self) -> Vec<&[Observation]> {
        self.points
            .split(|p| !p.has_temperature())
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// Pixel polyline segments; gaps where temperature is missing break the line.
    pub fn layout(&self, scales: &Scales, color: Rgba, stroke_width: f32) -> SeriesPath {
        let segments = self
            .defined_runs()
            .into_iter()
            .map(|run| run.iter().map(|p| (scales.x.to_px(p.date), scales.y.to_px(p.temperature))).collect())
            .collect();
        SeriesPath { city: self.city.clone(), color, stroke_width, segments }
    }
}

/// Group rows by city in order of first appearance, each group sorted by date.
pub fn group_by_city(rows: &[&Observation]) -> Vec<CitySeries> {
    let mut groups: Vec<(CityId, Vec<Observation>)> = Vec::new();
    for r in rows {
        match groups.iter_mut().find(|(c, _)| *c == r.city) {
            Some((_, pts)) => pts.push((*r).clone()),
            None => groups.push((r.city.clone(), vec![(*r).clone()])),
        }
    }
    groups.into_iter().map(|(city, pts)| CitySeries::new(city, pts)).collect()
}
