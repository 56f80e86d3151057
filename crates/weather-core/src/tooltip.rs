// File: crates/weather-core/src/tooltip.rs
// Summary: Nearest-in-time lookup per visible city and the composed multi-line tooltip.
// Notes:
// - A `Frame` is the read-only state left behind by the last redraw (scales,
//   sorted series, colors, surface layout). Pointer handling only reads it.
// - Equidistant neighbors resolve to the earlier point.

use chrono::NaiveDate;

use crate::error::TooltipError;
use crate::geometry::{clamp, RectF};
use crate::observation::{CityId, Observation};
use crate::scale::Scales;
use crate::series::CitySeries;
use crate::types::{Insets, PlotSize, Rgba};

/// Header date, e.g. `January 02, 2014`.
pub const HEADER_FORMAT: &str = "%B %d, %Y";

/// Offset from the pointer to the tooltip's top-left corner.
pub const OFFSET_X: f32 = 15.0;
pub const OFFSET_Y: f32 = -28.0;
pub const PADDING: f32 = 12.0;
pub const FONT_SIZE: f32 = 13.0;
pub const LINE_HEIGHT: f32 = 18.0;
/// Estimated advance per character at `FONT_SIZE`.
pub const CHAR_WIDTH: f32 = 7.0;
pub const OPACITY: f32 = 0.9;
/// Widest box; longer city names are cut with an ellipsis.
pub const MAX_WIDTH: f32 = 200.0;
/// Characters that fit inside `MAX_WIDTH` after padding.
pub const MAX_LABEL_CHARS: usize = ((MAX_WIDTH - 2.0 * PADDING) / CHAR_WIDTH) as usize;

/// State armed by a redraw and read by pointer handlers.
#[derive(Clone, Debug)]
pub struct Frame {
    pub scales: Scales,
    pub series: Vec<CitySeries>,
    pub colors: Vec<Rgba>,
    pub plot: PlotSize,
    pub surface: (i32, i32),
    pub insets: Insets,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub city: CityId,
    pub date: NaiveDate,
    pub temperature: f64,
    pub color: Rgba,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub header: String,
    pub date: NaiveDate,
    /// Sorted by temperature, warmest first.
    pub rows: Vec<TooltipRow>,
    /// Box in plot-local pixels.
    pub bounds: RectF,
    pub opacity: f32,
}

impl Tooltip {
    pub fn cities(&self) -> Vec<&str> { self.rows.iter().map(|r| r.city.as_str()).collect() }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(Tooltip),
}

impl TooltipState {
    pub fn is_visible(&self) -> bool { matches!(self, TooltipState::Visible(_)) }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            TooltipState::Visible(t) => Some(t),
            TooltipState::Hidden => None,
        }
    }
}

/// Indices straddling `target`: the last point strictly before it and the
/// first point at or after it (leftmost insertion point).
fn neighbors(points: &[Observation], target: f64) -> (Option<usize>, Option<usize>) {
    let i = points.partition_point(|p| p.day() < target);
    let before = i.checked_sub(1);
    let at = if i < points.len() { Some(i) } else { None };
    (before, at)
}

fn pick(points: &[Observation], target: f64, before: Option<usize>, at: Option<usize>) -> Option<usize> {
    match (before, at) {
        (Some(a), Some(b)) => {
            if target - points[a].day() > points[b].day() - target { Some(b) } else { Some(a) }
        }
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Index of the point closest in time to `target` (fractional day number).
/// `points` must be sorted by date.
pub fn nearest_index(points: &[Observation], target: f64) -> Option<usize> {
    let (before, at) = neighbors(points, target);
    pick(points, target, before, at)
}

/// Nearest point of one series; the bisection requires date order.
fn nearest_checked<'a>(series: &'a CitySeries, target: f64) -> Result<Option<&'a Observation>, TooltipError> {
    let pts = &series.points;
    if pts.windows(2).any(|w| w[0].date > w[1].date) {
        return Err(TooltipError::UnorderedSeries { city: series.city.clone(), target });
    }
    let (before, at) = neighbors(pts, target);
    Ok(pick(pts, target, before, at).map(|i| &pts[i]))
}

/// `● {city}: {t}°F`, with the city shortened so the label fits `MAX_LABEL_CHARS`.
pub fn row_label(city: &str, temperature: f64) -> String {
    let suffix = format!(": {temperature:.1}\u{00B0}F");
    let room = MAX_LABEL_CHARS.saturating_sub(suffix.chars().count() + 2);
    let city = if city.chars().count() > room {
        let mut cut = city.chars().take(room.saturating_sub(1)).collect::<String>();
        cut.push('\u{2026}');
        cut
    } else {
        city.to_string()
    };
    format!("\u{25CF} {city}{suffix}")
}

/// Resolve the tooltip for a plot-local pointer position.
pub fn resolve(frame: &Frame, x: f32, y: f32) -> Result<TooltipState, TooltipError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(TooltipError::NonFinitePointer { x, y });
    }
    if !frame.plot.contains(x, y) {
        return Ok(TooltipState::Hidden);
    }
    let target = frame.scales.x.invert_day(x);
    if !target.is_finite() {
        return Err(TooltipError::NonFiniteDate);
    }

    let mut rows = Vec::with_capacity(frame.series.len());
    for (i, series) in frame.series.iter().enumerate() {
        let Some(point) = nearest_checked(series, target)? else { continue };
        if !point.has_temperature() {
            continue;
        }
        let color = frame.colors.get(i).copied().unwrap_or(Rgba::rgb(255, 255, 255));
        rows.push(TooltipRow {
            city: series.city.clone(),
            date: point.date,
            temperature: point.temperature,
            color,
            label: row_label(&series.city, point.temperature),
        });
    }
    if rows.is_empty() {
        return Ok(TooltipState::Hidden);
    }

    // stable: equal temperatures keep series order
    rows.sort_by(|a, b| b.temperature.total_cmp(&a.temperature));
    let date = rows[0].date;
    let header = date.format(HEADER_FORMAT).to_string();
    let bounds = place(frame, x, y, &header, &rows);
    log::trace!("tooltip at ({x:.1}, {y:.1}) -> {} rows for {header}", rows.len());
    Ok(TooltipState::Visible(Tooltip { header, date, rows, bounds, opacity: OPACITY }))
}

/// Estimated box size for a header plus rows, capped at `MAX_WIDTH`.
pub fn estimate_size(header: &str, rows: &[TooltipRow]) -> (f32, f32) {
    let chars = rows.iter().map(|r| r.label.chars().count()).chain(std::iter::once(header.chars().count())).max().unwrap_or(0);
    let w = (chars as f32 * CHAR_WIDTH + PADDING * 2.0).min(MAX_WIDTH);
    let h = (rows.len() + 1) as f32 * LINE_HEIGHT + PADDING * 2.0;
    (w, h)
}

/// Place the box beside the pointer: right of it when it fits on the surface,
/// else left of it, else on the roomier side. Vertically clamped to the surface.
fn place(frame: &Frame, x: f32, y: f32, header: &str, rows: &[TooltipRow]) -> RectF {
    let (w, h) = estimate_size(header, rows);
    let (sw, sh) = (frame.surface.0 as f32, frame.surface.1 as f32);
    let (ox, oy) = (frame.insets.left as f32, frame.insets.top as f32);

    // room on each side of the pointer, in surface pixels
    let room_right = sw - (ox + x + OFFSET_X);
    let room_left = ox + x - OFFSET_X;
    let left = if room_right >= w || (room_left < w && room_right >= room_left) {
        x + OFFSET_X
    } else {
        x - OFFSET_X - w
    };

    let top = if h >= sh { -oy } else { clamp(y + OFFSET_Y, -oy, sh - oy - h) };
    RectF::from_ltwh(left, top, w, h)
}
