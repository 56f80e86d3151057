// File: crates/weather-core/src/chart.rs
// Summary: Chart session: owns the dataset and selection, rebuilds the scene on every change,
//          and answers pointer events from the frame armed by the last redraw.

use std::path::Path;

use anyhow::{Context, Result};

use crate::axis::build_axes;
use crate::legend::layout_legend;
use crate::observation::{CityId, Dataset};
use crate::palette::ColorMap;
use crate::scale::build_scales;
use crate::scene::Scene;
use crate::selection::{CityToggles, Selection};
use crate::series::group_by_city;
use crate::svg::to_svg;
use crate::theme::Theme;
use crate::tooltip::{resolve, Frame, TooltipState};
use crate::types::{Insets, PlotSize, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub x_title: String,
    pub y_title: String,
    pub stroke_width: f32,
    /// Raster renderers skip text when false (deterministic snapshots).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            x_title: "Date".to_string(),
            y_title: "Mean Temperature (\u{00B0}F)".to_string(),
            stroke_width: 2.0,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn plot_size(&self) -> PlotSize { PlotSize::from_surface(self.width, self.height, &self.insets) }
}

/// Build the scene for `selection`. Returns the frame the tooltip reads, or
/// `None` when nothing was drawn (empty selection, no rows, no finite temperature).
pub fn draw(dataset: &Dataset, selection: &Selection, colors: &ColorMap, opts: &RenderOptions) -> (Scene, Option<Frame>) {
    let plot = opts.plot_size();
    let mut scene = Scene::empty(opts.width, opts.height, opts.insets);
    if selection.is_empty() {
        return (scene, None);
    }

    let rows = dataset.filter(|city| selection.contains(city));
    let Some(scales) = build_scales(&rows, plot) else {
        log::debug!("nothing to draw for {} selected cities ({} rows)", selection.len(), rows.len());
        return (scene, None);
    };

    let series = group_by_city(&rows);
    let series_colors = series.iter().map(|s| colors.color(&s.city)).collect::<Vec<_>>();
    scene.series = series
        .iter()
        .zip(&series_colors)
        .map(|(s, &color)| s.layout(&scales, color, opts.stroke_width))
        // a city with no finite temperature keeps its legend entry but draws no path
        .filter(|p| !p.segments.is_empty())
        .collect();
    scene.axes = build_axes(&scales, plot, &opts.insets, &opts.x_title, &opts.y_title);
    scene.legend = layout_legend(selection, colors, plot);

    log::debug!("drew {} series, {} points", scene.series.len(), scene.point_count());
    let frame = Frame {
        scales,
        series,
        colors: series_colors,
        plot,
        surface: (opts.width, opts.height),
        insets: opts.insets,
    };
    (scene, Some(frame))
}

/// One rendering session. Single writer (load) and readers (redraw, pointer)
/// are ordered by `&mut self`, so a pointer event always sees the latest redraw.
pub struct Chart {
    dataset: Dataset,
    known: Vec<CityId>,
    colors: ColorMap,
    selection: Selection,
    opts: RenderOptions,
    frame: Option<Frame>,
    scene: Scene,
    tooltip: TooltipState,
}

impl Chart {
    /// Selects every known city and draws.
    pub fn new(dataset: Dataset, opts: RenderOptions) -> Self {
        let known = dataset.cities();
        let colors = ColorMap::new(&known);
        let selection = Selection::all(&known);
        let scene = Scene::empty(opts.width, opts.height, opts.insets);
        let mut chart = Self { dataset, known, colors, selection, opts, frame: None, scene, tooltip: TooltipState::Hidden };
        chart.redraw();
        chart
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn known_cities(&self) -> &[CityId] { &self.known }
    pub fn colors(&self) -> &ColorMap { &self.colors }
    pub fn selection(&self) -> &Selection { &self.selection }
    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn frame(&self) -> Option<&Frame> { self.frame.as_ref() }
    pub fn tooltip(&self) -> &TooltipState { &self.tooltip }

    /// Toggle panel matching the current selection.
    pub fn toggles(&self) -> CityToggles {
        let mut t = CityToggles::new(&self.known);
        for city in &self.known {
            t.set(city, self.selection.contains(city));
        }
        t
    }

    /// Replace the selection (unknown cities are dropped) and redraw.
    pub fn set_selection(&mut self, selection: &Selection) -> &Scene {
        let requested = selection.iter().collect::<Vec<_>>();
        self.selection = Selection::new(&self.known, &requested);
        self.redraw()
    }

    pub fn select<S: AsRef<str>>(&mut self, cities: &[S]) -> &Scene {
        self.selection = Selection::new(&self.known, cities);
        self.redraw()
    }

    pub fn apply_toggles(&mut self, toggles: &CityToggles) -> &Scene {
        self.set_selection(&toggles.selection())
    }

    pub fn set_options(&mut self, opts: RenderOptions) -> &Scene {
        self.opts = opts;
        self.redraw()
    }

    /// Clear and rebuild everything; re-arms the tooltip and hides it.
    pub fn redraw(&mut self) -> &Scene {
        let (scene, frame) = draw(&self.dataset, &self.selection, &self.colors, &self.opts);
        self.scene = scene;
        self.frame = frame;
        self.tooltip = TooltipState::Hidden;
        &self.scene
    }

    /// Pointer moved to plot-local `(x, y)`. Any resolution error hides the tooltip.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> &TooltipState {
        self.tooltip = match &self.frame {
            None => TooltipState::Hidden,
            Some(frame) => resolve(frame, x, y).unwrap_or_else(|e| {
                log::warn!("tooltip error: {e}");
                TooltipState::Hidden
            }),
        };
        &self.tooltip
    }

    pub fn pointer_leave(&mut self) {
        self.tooltip = TooltipState::Hidden;
    }

    /// SVG document of the current scene, including the tooltip when visible.
    pub fn to_svg(&self) -> String {
        to_svg(&self.scene, self.tooltip.tooltip(), &self.opts.theme)
    }

    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.to_svg()).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
