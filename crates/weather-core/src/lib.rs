// File: crates/weather-core/src/lib.rs
// Summary: Core library entry point; exports the public API for loading weather tables,
//          drawing per-city temperature lines and resolving the hover tooltip.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod loader;
pub mod observation;
pub mod palette;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod series;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use chart::{draw, Chart, RenderOptions};
pub use error::{LoadError, TooltipError};
pub use loader::{LoadOptions, LoadReport, Loaded};
pub use observation::{CityId, Dataset, Observation};
pub use palette::ColorMap;
pub use scale::{build_scales, Scales, TimeScale, ValueScale};
pub use scene::{AxisGuide, LegendEntry, Orient, Scene, SeriesPath, Tick};
pub use selection::{CityToggles, Selection};
pub use series::{group_by_city, CitySeries};
pub use theme::Theme;
pub use tooltip::{nearest_index, Frame, Tooltip, TooltipRow, TooltipState};
pub use types::{Insets, PlotSize, Rgba};
