// File: crates/weather-core/src/legend.rs
// Summary: Horizontal flow layout for the legend; entry width grows with label length.

use crate::palette::ColorMap;
use crate::scene::LegendEntry;
use crate::selection::Selection;
use crate::types::PlotSize;

/// Length of the color swatch line.
pub const SWATCH_LEN: f32 = 15.0;
/// Label x offset from the entry origin.
pub const LABEL_OFFSET: f32 = 20.0;
/// Estimated width of one label character at the legend font size.
pub const CHAR_WIDTH: f32 = 8.0;
/// Space after each label before the next swatch.
pub const ENTRY_PAD: f32 = 40.0;
/// Legend row sits this far above the bottom of the plot.
pub const ROW_FROM_BOTTOM: f32 = 250.0;

/// Horizontal advance taken by an entry with `label`.
pub fn entry_advance(label: &str) -> f32 {
    label.chars().count() as f32 * CHAR_WIDTH + ENTRY_PAD
}

/// One entry per selected city, in selection order, flowing left to right.
pub fn layout_legend(selection: &Selection, colors: &ColorMap, plot: PlotSize) -> Vec<LegendEntry> {
    let y = (plot.height - ROW_FROM_BOTTOM).max(0.0);
    let mut x = 0.0f32;
    let mut out = Vec::with_capacity(selection.len());
    for city in selection.iter() {
        out.push(LegendEntry { city: city.clone(), color: colors.color(city), x, y, label: city.clone() });
        x += entry_advance(city);
    }
    out
}
