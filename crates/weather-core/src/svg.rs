// File: crates/weather-core/src/svg.rs
// Summary: Serialize a Scene (plus an optional tooltip) as a standalone SVG document.

use crate::legend::{LABEL_OFFSET, SWATCH_LEN};
use crate::scene::{AxisGuide, Orient, Scene, SeriesPath};
use crate::theme::Theme;
use crate::tooltip::{self, Tooltip};
use crate::types::Rgba;

const TICK_LEN: f32 = 6.0;
const TICK_PAD: f32 = 3.0;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn fill_attrs(name: &str, c: Rgba) -> String {
    if c.a == 255 {
        format!("{name}=\"{}\"", c.to_hex())
    } else {
        format!("{name}=\"{}\" {name}-opacity=\"{:.3}\"", c.to_hex(), c.opacity())
    }
}

/// `M x,y L x,y ...` for every segment.
pub fn path_data(path: &SeriesPath) -> String {
    let mut d = String::new();
    for seg in &path.segments {
        for (i, (x, y)) in seg.iter().enumerate() {
            if !d.is_empty() { d.push(' '); }
            d.push_str(&format!("{}{:.2},{:.2}", if i == 0 { 'M' } else { 'L' }, x, y));
        }
    }
    d
}

fn axis(out: &mut String, a: &AxisGuide, theme: &Theme) {
    let class = match a.orient { Orient::Bottom => "x-axis", Orient::Left => "y-axis" };
    out.push_str(&format!("<g class=\"axis {class}\" font-size=\"10\" font-family=\"sans-serif\">\n"));
    out.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
        a.from.0, a.from.1, a.to.0, a.to.1, fill_attrs("stroke", theme.axis_line)
    ));
    for t in &a.ticks {
        let (x1, y1, x2, y2, lx, ly, anchor) = match a.orient {
            Orient::Bottom => (t.offset, a.from.1, t.offset, a.from.1 + TICK_LEN, t.offset, a.from.1 + TICK_LEN + TICK_PAD, "end"),
            Orient::Left => (a.from.0 - TICK_LEN, t.offset, a.from.0, t.offset, a.from.0 - TICK_LEN - TICK_PAD, t.offset, "end"),
        };
        out.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" {}/>\n",
            fill_attrs("stroke", theme.tick)
        ));
        let rotate = if a.tick_label_rotation != 0.0 { format!(" rotate({})", a.tick_label_rotation) } else { String::new() };
        out.push_str(&format!(
            "<text transform=\"translate({lx:.2},{ly:.2}){rotate}\" dy=\"0.32em\" text-anchor=\"{anchor}\" {}>{}</text>\n",
            fill_attrs("fill", theme.axis_label),
            escape(&t.label)
        ));
    }
    out.push_str("</g>\n");
    out.push_str(&format!(
        "<text class=\"axis-title\" transform=\"translate({:.2},{:.2}) rotate({})\" text-anchor=\"middle\" font-size=\"14\" font-family=\"sans-serif\" {}>{}</text>\n",
        a.title_pos.0,
        a.title_pos.1,
        a.title_rotation,
        fill_attrs("fill", theme.axis_label),
        escape(&a.title)
    ));
}

fn tooltip_box(out: &mut String, t: &Tooltip, theme: &Theme) {
    let b = t.bounds;
    out.push_str(&format!(
        "<g class=\"tooltip\" opacity=\"{:.2}\" font-size=\"{}\" font-family=\"Arial, sans-serif\">\n",
        t.opacity,
        tooltip::FONT_SIZE
    ));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"6\" {}/>\n",
        b.left,
        b.top,
        b.width(),
        b.height(),
        fill_attrs("fill", theme.tooltip_background)
    ));
    let x = b.left + tooltip::PADDING;
    let mut y = b.top + tooltip::PADDING + tooltip::FONT_SIZE;
    out.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" font-weight=\"bold\" {}>{}</text>\n",
        fill_attrs("fill", theme.tooltip_text),
        escape(&t.header)
    ));
    for row in &t.rows {
        y += tooltip::LINE_HEIGHT;
        out.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" {}>{}</text>\n",
            fill_attrs("fill", row.color),
            escape(&row.label)
        ));
    }
    out.push_str("</g>\n");
}

pub fn to_svg(scene: &Scene, tooltip: Option<&Tooltip>, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = scene.width,
        h = scene.height
    ));
    out.push_str(&format!("<rect width=\"100%\" height=\"100%\" {}/>\n", fill_attrs("fill", theme.background)));
    out.push_str(&format!("<g transform=\"translate({},{})\">\n", scene.insets.left, scene.insets.top));

    for s in &scene.series {
        out.push_str(&format!(
            "<path data-city=\"{}\" d=\"{}\" fill=\"none\" {} stroke-width=\"{}\"/>\n",
            escape(&s.city),
            path_data(s),
            fill_attrs("stroke", s.color),
            s.stroke_width
        ));
    }
    for a in &scene.axes {
        axis(&mut out, a, theme);
    }
    if !scene.legend.is_empty() {
        out.push_str("<g class=\"legend\" font-size=\"12\" font-family=\"sans-serif\">\n");
        for e in &scene.legend {
            out.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {} stroke-width=\"2\"/>\n",
                e.x,
                e.y,
                e.x + SWATCH_LEN,
                e.y,
                fill_attrs("stroke", e.color)
            ));
            out.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" dy=\"0.35em\" {}>{}</text>\n",
                e.x + LABEL_OFFSET,
                e.y,
                fill_attrs("fill", theme.legend_text),
                escape(&e.label)
            ));
        }
        out.push_str("</g>\n");
    }
    if let Some(t) = tooltip {
        tooltip_box(&mut out, t, theme);
    }
    out.push_str("</g>\n</svg>\n");
    out
}
