// File: crates/weather-core/src/axis.rs
// Summary: Axis guides: monthly date ticks along the bottom, value ticks on the left.

use crate::grid::{format_tick, month_ticks, tick_precision};
use crate::scale::{Scales, VALUE_TICKS};
use crate::scene::{AxisGuide, Orient, Tick};
use crate::types::{Insets, PlotSize};

/// Month tick label, e.g. `Jan-2014`.
pub const MONTH_FORMAT: &str = "%b-%Y";

pub fn bottom_axis(scales: &Scales, plot: PlotSize, insets: &Insets, title: &str) -> AxisGuide {
    let (min, max) = scales.x.domain();
    let ticks = month_ticks(min, max)
        .into_iter()
        .map(|d| Tick { offset: scales.x.to_px(d), label: d.format(MONTH_FORMAT).to_string() })
        .collect();
    AxisGuide {
        orient: Orient::Bottom,
        from: (0.0, plot.height),
        to: (plot.width, plot.height),
        ticks,
        tick_label_rotation: -45.0,
        title: title.to_string(),
        title_pos: (plot.width / 2.0, plot.height + insets.bottom as f32 - 10.0),
        title_rotation: 0.0,
    }
}

pub fn left_axis(scales: &Scales, plot: PlotSize, title: &str) -> AxisGuide {
    let precision = tick_precision(scales.y.tick_step(VALUE_TICKS));
    let ticks = scales
        .y
        .ticks(VALUE_TICKS)
        .into_iter()
        .map(|v| Tick { offset: scales.y.to_px(v), label: format_tick(v, precision) })
        .collect();
    AxisGuide {
        orient: Orient::Left,
        from: (0.0, 0.0),
        to: (0.0, plot.height),
        ticks,
        tick_label_rotation: 0.0,
        title: title.to_string(),
        title_pos: (-50.0, plot.height / 2.0),
        title_rotation: -90.0,
    }
}

pub fn build_axes(scales: &Scales, plot: PlotSize, insets: &Insets, x_title: &str, y_title: &str) -> Vec<AxisGuide> {
    vec![bottom_axis(scales, plot, insets, x_title), left_axis(scales, plot, y_title)]
}
