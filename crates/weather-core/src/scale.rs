// File: crates/weather-core/src/scale.rs
// Summary: Time (X) and Value (Y) scales mapping data to plot-local pixels, with nice rounding.

use chrono::NaiveDate;

use crate::grid::{tick_increment, tick_step, ticks};
use crate::observation::{date_extent, day_number, temperature_extent, Observation};
use crate::types::PlotSize;

/// Horizontal scale: calendar days mapped linearly onto `[0, width_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub min: NaiveDate,
    pub max: NaiveDate,
    pub width_px: f32,
    d0: f64,
    d1: f64,
}

impl TimeScale {
    pub fn from_extent(min: NaiveDate, max: NaiveDate, width_px: f32) -> Self {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        Self { min, max, width_px, d0: day_number(min), d1: day_number(max) }
    }

    #[inline]
    fn span(&self) -> f64 { self.d1 - self.d0 }

    /// Single-day domains map everything to the middle of the range.
    #[inline]
    pub fn day_to_px(&self, day: f64) -> f32 {
        let span = self.span();
        if span == 0.0 {
            return self.width_px * 0.5;
        }
        (((day - self.d0) / span) * self.width_px as f64) as f32
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 { self.day_to_px(day_number(date)) }

    /// Fractional day number under pixel `px`.
    #[inline]
    pub fn invert_day(&self, px: f32) -> f64 {
        let span = self.span();
        if span == 0.0 || self.width_px <= 0.0 {
            return self.d0;
        }
        self.d0 + (px as f64 / self.width_px as f64) * span
    }

    /// Calendar date closest to pixel `px`.
    pub fn invert(&self, px: f32) -> Option<NaiveDate> {
        let day = self.invert_day(px);
        if !day.is_finite() { return None; }
        NaiveDate::from_num_days_from_ce_opt(day.round() as i32)
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) { (self.min, self.max) }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`
/// (screen y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// Linear scale over `[0, height_px]`, inverted. A zero-width domain is widened by one unit each side.
    pub fn linear(vmin: f64, vmax: f64, height_px: f32) -> Self {
        let (mut vmin, mut vmax) = if vmax < vmin { (vmax, vmin) } else { (vmin, vmax) };
        if (vmax - vmin).abs() < 1e-12 {
            vmin -= 1.0;
            vmax += 1.0;
        }
        Self { top_px: 0.0, bottom_px: height_px, vmin, vmax }
    }

    /// Expand the domain outward to round tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = (self.vmin, self.vmax);
        let mut prestep = f64::NAN;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }
        if start.is_finite() && stop.is_finite() {
            self.vmin = start;
            self.vmax = stop;
        }
        self
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((v - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn invert(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        let h = (self.bottom_px - self.top_px).max(1e-6);
        self.vmin + ((self.bottom_px - py) / h) as f64 * span
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> { ticks(self.vmin, self.vmax, count) }

    pub fn tick_step(&self, count: usize) -> f64 { tick_step(self.vmin, self.vmax, count) }
}

/// Both scales for one redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: ValueScale,
}

/// Number of value ticks requested for nice rounding and the left axis.
pub const VALUE_TICKS: usize = 10;

/// Scales covering `rows`. `None` when there is nothing to draw: no rows, or
/// no finite temperature among them.
pub fn build_scales(rows: &[&Observation], plot: PlotSize) -> Option<Scales> {
    let (dmin, dmax) = date_extent(rows.iter().copied())?;
    let (tmin, tmax) = temperature_extent(rows.iter().copied())?;
    Some(Scales {
        x: TimeScale::from_extent(dmin, dmax, plot.width),
        y: ValueScale::linear(tmin, tmax, plot.height).nice(VALUE_TICKS),
    })
}
