// File: crates/weather-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a weather-core Scene (and optional tooltip) on a Skia CPU raster surface.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use weather_core::legend::{LABEL_OFFSET, SWATCH_LEN};
use weather_core::tooltip::{self, Tooltip};
use weather_core::{AxisGuide, Orient, RenderOptions, Rgba, Scene, SeriesPath, Theme};

pub mod text;

pub use text::{Anchor, TextShaper};

const TICK_LEN: f32 = 6.0;
const TICK_PAD: f32 = 3.0;
const TICK_FONT: f32 = 10.0;
const TITLE_FONT: f32 = 14.0;
const LEGEND_FONT: f32 = 12.0;

pub fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Rasterize `scene` and return the encoded PNG.
pub fn render_to_png_bytes(scene: &Scene, tooltip: Option<&Tooltip>, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((scene.width, scene.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", scene.width, scene.height))?;
    let canvas = surface.canvas();
    canvas.clear(color(opts.theme.background));

    let shaper = opts.draw_labels.then(TextShaper::new);

    canvas.save();
    canvas.translate((scene.insets.left as f32, scene.insets.top as f32));
    for s in &scene.series {
        draw_series(canvas, s);
    }
    for a in &scene.axes {
        draw_axis(canvas, a, &opts.theme, shaper.as_ref());
    }
    draw_legend(canvas, scene, &opts.theme, shaper.as_ref());
    if let Some(t) = tooltip {
        draw_tooltip(canvas, t, &opts.theme, shaper.as_ref());
    }
    canvas.restore();

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    log::debug!("rasterized {} series into {} PNG bytes", scene.series.len(), data.as_bytes().len());
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file, creating parent directories as needed.
pub fn render_to_png(
    scene: &Scene,
    tooltip: Option<&Tooltip>,
    opts: &RenderOptions,
    output_png_path: impl AsRef<Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(scene, tooltip, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

fn draw_series(canvas: &skia::Canvas, series: &SeriesPath) {
    let mut builder = skia::PathBuilder::new();
    for seg in &series.segments {
        let Some((&first, rest)) = seg.split_first() else { continue };
        builder.move_to(first);
        for &p in rest {
            builder.line_to(p);
        }
    }
    let path = builder.detach();
    canvas.draw_path(&path, &stroke_paint(series.color, series.stroke_width));

    // a single-point run has no length; mark it with a dot
    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(color(series.color));
    for seg in series.segments.iter().filter(|s| s.len() == 1) {
        canvas.draw_circle(seg[0], series.stroke_width, &dot);
    }
}

fn draw_axis(canvas: &skia::Canvas, a: &AxisGuide, theme: &Theme, shaper: Option<&TextShaper>) {
    canvas.draw_line(a.from, a.to, &stroke_paint(theme.axis_line, 1.0));
    let tick_paint = stroke_paint(theme.tick, 1.0);
    for t in &a.ticks {
        let (p0, p1, label_at) = match a.orient {
            Orient::Bottom => (
                (t.offset, a.from.1),
                (t.offset, a.from.1 + TICK_LEN),
                (t.offset, a.from.1 + TICK_LEN + TICK_PAD),
            ),
            Orient::Left => (
                (a.from.0 - TICK_LEN, t.offset),
                (a.from.0, t.offset),
                (a.from.0 - TICK_LEN - TICK_PAD, t.offset),
            ),
        };
        canvas.draw_line(p0, p1, &tick_paint);
        if let Some(shaper) = shaper {
            canvas.save();
            canvas.translate(label_at);
            if a.tick_label_rotation != 0.0 {
                canvas.rotate(a.tick_label_rotation, None);
            }
            shaper.draw(canvas, &t.label, 0.0, TICK_FONT * 0.35, TICK_FONT, color(theme.axis_label), Anchor::End);
            canvas.restore();
        }
    }
    if let Some(shaper) = shaper {
        canvas.save();
        canvas.translate(a.title_pos);
        canvas.rotate(a.title_rotation, None);
        shaper.draw(canvas, &a.title, 0.0, 0.0, TITLE_FONT, color(theme.axis_label), Anchor::Middle);
        canvas.restore();
    }
}

fn draw_legend(canvas: &skia::Canvas, scene: &Scene, theme: &Theme, shaper: Option<&TextShaper>) {
    for e in &scene.legend {
        canvas.draw_line((e.x, e.y), (e.x + SWATCH_LEN, e.y), &stroke_paint(e.color, 2.0));
        if let Some(shaper) = shaper {
            let baseline = e.y + LEGEND_FONT * 0.35;
            shaper.draw(canvas, &e.label, e.x + LABEL_OFFSET, baseline, LEGEND_FONT, color(theme.legend_text), Anchor::Start);
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, t: &Tooltip, theme: &Theme, shaper: Option<&TextShaper>) {
    let b = t.bounds;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(color(theme.tooltip_background));
    fill.set_alpha_f(theme.tooltip_background.opacity() * t.opacity);
    canvas.draw_round_rect(skia::Rect::from_ltrb(b.left, b.top, b.right, b.bottom), 6.0, 6.0, &fill);

    let Some(shaper) = shaper else { return };
    let x = b.left + tooltip::PADDING;
    let mut y = b.top + tooltip::PADDING + tooltip::FONT_SIZE;
    shaper.draw_styled(canvas, &t.header, (x, y), tooltip::FONT_SIZE, color(theme.tooltip_text), Anchor::Start, true);
    for row in &t.rows {
        y += tooltip::LINE_HEIGHT;
        shaper.draw(canvas, &row.label, x, y, tooltip::FONT_SIZE, color(row.color), Anchor::Start);
    }
}
