// File: crates/weather-core/src/scene.rs
// Summary: Renderer-agnostic description of one drawn chart (paths, axes, legend).
// Notes:
// - All coordinates are plot-local: (0, 0) is the top-left corner of the plot
//   area. Renderers translate by the insets.

use crate::observation::CityId;
use crate::types::{Insets, PlotSize, Rgba};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis (x for bottom, y for left).
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisGuide {
    pub orient: Orient,
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub ticks: Vec<Tick>,
    /// Rotation of tick labels in degrees (negative = counter-clockwise).
    pub tick_label_rotation: f32,
    pub title: String,
    pub title_pos: (f32, f32),
    pub title_rotation: f32,
}

/// One polyline per city. Each segment is a maximal run of finite temperatures.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub city: CityId,
    pub color: Rgba,
    pub stroke_width: f32,
    pub segments: Vec<Vec<(f32, f32)>>,
}

impl SeriesPath {
    pub fn point_count(&self) -> usize { self.segments.iter().map(Vec::len).sum() }
}

/// Swatch runs from `(x, y)` to `(x + SWATCH_LEN, y)`; label starts at `x + LABEL_OFFSET`.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub city: CityId,
    pub color: Rgba,
    pub x: f32,
    pub y: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub series: Vec<SeriesPath>,
    pub axes: Vec<AxisGuide>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    /// Nothing drawn: the state after a failed load or an empty selection.
    pub fn empty(width: i32, height: i32, insets: Insets) -> Self {
        Self { width, height, insets, series: Vec::new(), axes: Vec::new(), legend: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.axes.is_empty() && self.legend.is_empty()
    }

    pub fn plot_size(&self) -> PlotSize { PlotSize::from_surface(self.width, self.height, &self.insets) }

    /// Cities with a drawn path, in draw order.
    pub fn cities(&self) -> Vec<&str> { self.series.iter().map(|s| s.city.as_str()).collect() }

    pub fn path(&self, city: &str) -> Option<&SeriesPath> { self.series.iter().find(|s| s.city == city) }

    pub fn point_count(&self) -> usize { self.series.iter().map(SeriesPath::point_count).sum() }
}
