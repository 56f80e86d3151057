// File: crates/weather-render-skia/tests/smoke.rs
// Purpose: End-to-end raster smoke tests: PNG header, surface size, background and stroke pixels.

use chrono::NaiveDate;
use weather_core::theme::Theme;
use weather_core::{Chart, Dataset, Observation, RenderOptions};
use weather_render_skia::{render_to_png, render_to_png_bytes};

fn jan(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 1, d).unwrap()
}

fn chart(opts: RenderOptions) -> Chart {
    let ds = Dataset::new(vec![
        Observation::new(jan(1), "A", 40.0),
        Observation::new(jan(3), "A", 60.0),
        Observation::new(jan(1), "B", 50.0),
        Observation::new(jan(2), "B", f64::NAN),
        Observation::new(jan(3), "B", 45.0),
    ]);
    Chart::new(ds, opts)
}

fn unlabeled() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn render_smoke_png() {
    let chart = chart(RenderOptions::default());
    let out = std::path::PathBuf::from("target/test_out/weather_smoke.png");
    render_to_png(chart.scene(), None, chart.options(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(chart.scene(), None, chart.options()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (900, 400));
}

#[test]
fn background_follows_theme_and_lines_are_drawn() {
    let chart = chart(unlabeled());
    let bytes = render_to_png_bytes(chart.scene(), None, chart.options()).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);

    // A runs corner to corner of the 800x250 plot; its midpoint is (400, 125) + insets
    let mid = img.get_pixel(470, 175).0;
    assert_ne!(mid, [255, 255, 255, 255], "stroke should cover the midpoint");

    let dark = RenderOptions { theme: Theme::dark(), ..unlabeled() };
    let bytes = render_to_png_bytes(chart.scene(), None, &dark).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [18, 18, 20, 255]);
}

#[test]
fn tooltip_box_is_painted() {
    let mut chart = chart(unlabeled());
    let plain = render_to_png_bytes(chart.scene(), None, chart.options()).expect("render");
    let t = chart.pointer_move(100.0, 120.0).tooltip().cloned().expect("visible");
    let with_tip = render_to_png_bytes(chart.scene(), Some(&t), chart.options()).expect("render");

    let a = image::load_from_memory(&plain).expect("decode").to_rgba8();
    let b = image::load_from_memory(&with_tip).expect("decode").to_rgba8();
    // sample inside the box, away from the rounded corners
    let (x, y) = (70 + (t.bounds.left + 8.0) as u32, 50 + (t.bounds.top + 8.0) as u32);
    assert_ne!(a.get_pixel(x, y), b.get_pixel(x, y));
}

#[test]
fn empty_scene_is_background_only() {
    let chart = Chart::new(Dataset::empty(), unlabeled());
    let bytes = render_to_png_bytes(chart.scene(), None, chart.options()).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}
