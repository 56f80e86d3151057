// File: crates/weather-core/tests/redraw.rs
// Purpose: Multi-series redraw properties: filtering, grouping, gaps, colors, legend, idempotence.

use chrono::NaiveDate;
use weather_core::legend;
use weather_core::{draw, Chart, CityToggles, ColorMap, Dataset, Observation, Orient, RenderOptions, Selection};

fn jan(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 1, d).unwrap()
}

fn dataset() -> Dataset {
    Dataset::new(vec![
        Observation::new(jan(3), "Houston", 61.0),
        Observation::new(jan(1), "Charlotte", 40.0),
        Observation::new(jan(1), "Houston", 58.0),
        Observation::new(jan(2), "Charlotte", f64::NAN),
        Observation::new(jan(2), "Houston", 60.0),
        Observation::new(jan(3), "Charlotte", 44.0),
        Observation::new(jan(4), "Charlotte", 45.0),
        Observation::new(jan(2), "Seattle", 47.0),
    ])
}

#[test]
fn series_grouped_in_first_appearance_order_and_sorted() {
    let chart = Chart::new(dataset(), RenderOptions::default());
    assert_eq!(chart.scene().cities(), vec!["Houston", "Charlotte", "Seattle"]);

    let frame = chart.frame().expect("drawn");
    let houston = &frame.series[0];
    let dates = houston.points.iter().map(|p| p.date).collect::<Vec<_>>();
    assert_eq!(dates, vec![jan(1), jan(2), jan(3)]);

    // x grows with date along the drawn path
    let seg = &chart.scene().path("Houston").expect("path").segments[0];
    assert!(seg.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn missing_temperature_breaks_the_line() {
    let chart = Chart::new(dataset(), RenderOptions::default());
    let path = chart.scene().path("Charlotte").expect("path");
    assert_eq!(path.segments.len(), 2);
    assert_eq!(path.segments[0].len(), 1);
    assert_eq!(path.segments[1].len(), 2);
    assert!(path.segments.iter().flatten().all(|(x, y)| x.is_finite() && y.is_finite()));

    // the dataset itself keeps every row
    assert_eq!(chart.dataset().len(), 8);
}

#[test]
fn filtering_never_shrinks_the_dataset() {
    let mut chart = Chart::new(dataset(), RenderOptions::default());
    chart.select(&["Seattle"]);
    chart.select::<&str>(&[]);
    assert_eq!(chart.dataset().len(), 8);
}

#[test]
fn subset_selection_draws_subset_of_series() {
    let ds = dataset();
    let known = ds.cities();
    let colors = ColorMap::new(&known);
    let opts = RenderOptions::default();

    let s1 = Selection::new(&known, &["Charlotte"]);
    let s2 = Selection::new(&known, &["Charlotte", "Seattle"]);
    assert!(s1.is_subset_of(&s2));

    let (scene1, _) = draw(&ds, &s1, &colors, &opts);
    let (scene2, _) = draw(&ds, &s2, &colors, &opts);
    assert!(scene1.cities().iter().all(|c| scene2.cities().contains(c)));
    assert_eq!(scene1.cities(), vec!["Charlotte"]);
}

#[test]
fn redraw_is_idempotent() {
    let mut chart = Chart::new(dataset(), RenderOptions::default());
    let first = chart.scene().clone();
    let again = chart.redraw().clone();
    assert_eq!(first, again);
}

#[test]
fn colors_survive_deselect_and_reselect() {
    let mut chart = Chart::new(dataset(), RenderOptions::default());
    let before = chart.scene().path("Seattle").expect("seattle").color;

    chart.select(&["Seattle"]);
    assert_eq!(chart.scene().path("Seattle").expect("seattle").color, before);

    chart.select(&["Houston"]);
    assert!(chart.scene().path("Seattle").is_none());

    chart.select(&["Houston", "Seattle"]);
    assert_eq!(chart.scene().path("Seattle").expect("seattle").color, before);
    assert_ne!(chart.colors().color("Houston"), chart.colors().color("Seattle"));
}

#[test]
fn empty_selection_and_unknown_cities_draw_nothing() {
    let mut chart = Chart::new(dataset(), RenderOptions::default());
    assert!(chart.select::<&str>(&[]).is_empty());
    assert!(chart.frame().is_none());
    assert!(!chart.pointer_move(10.0, 10.0).is_visible());

    chart.select(&["Atlantis"]);
    assert!(chart.selection().is_empty());
    assert!(chart.scene().is_empty());
}

#[test]
fn all_missing_temperatures_is_an_empty_render() {
    let ds = Dataset::new(vec![
        Observation::new(jan(1), "A", f64::NAN),
        Observation::new(jan(2), "A", f64::NAN),
    ]);
    let chart = Chart::new(ds, RenderOptions::default());
    assert!(chart.scene().is_empty());
    assert!(chart.frame().is_none());
}

#[test]
fn empty_dataset_after_failed_load_stays_blank() {
    let mut chart = Chart::new(Dataset::empty(), RenderOptions::default());
    assert!(chart.scene().is_empty());
    assert!(chart.known_cities().is_empty());
    assert!(!chart.pointer_move(1.0, 1.0).is_visible());
}

#[test]
fn legend_flows_left_to_right_without_overlap() {
    let mut chart = Chart::new(dataset(), RenderOptions::default());
    chart.select(&["Seattle", "Charlotte"]);
    let entries = &chart.scene().legend;
    // selection follows known order, not request order
    let names = entries.iter().map(|e| e.label.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Charlotte", "Seattle"]);

    assert_eq!(entries[0].x, 0.0);
    assert_eq!(entries[1].x, legend::entry_advance("Charlotte"));
    assert_eq!(legend::entry_advance("Charlotte"), 9.0 * 8.0 + 40.0);
    for w in entries.windows(2) {
        let label_end = w[0].x + legend::LABEL_OFFSET + w[0].label.len() as f32 * legend::CHAR_WIDTH;
        assert!(label_end < w[1].x);
    }
    let plot = chart.options().plot_size();
    assert!(entries.iter().all(|e| e.y == (plot.height - legend::ROW_FROM_BOTTOM).max(0.0)));
    assert_eq!(entries[0].color, chart.colors().color("Charlotte"));
}

#[test]
fn axes_cover_domain() {
    let chart = Chart::new(dataset(), RenderOptions::default());
    let axes = &chart.scene().axes;
    assert_eq!(axes.len(), 2);
    let bottom = axes.iter().find(|a| a.orient == Orient::Bottom).expect("bottom");
    assert_eq!(bottom.title, "Date");
    assert_eq!(bottom.ticks.len(), 1);
    assert_eq!(bottom.ticks[0].label, "Jan-2014");
    assert_eq!(bottom.ticks[0].offset, 0.0);

    let left = axes.iter().find(|a| a.orient == Orient::Left).expect("left");
    assert_eq!(left.title, "Mean Temperature (\u{00B0}F)");
    assert!(left.ticks.len() >= 2);
    // ticks run bottom to top
    assert!(left.ticks.windows(2).all(|w| w[0].offset > w[1].offset));
}

#[test]
fn toggles_drive_selection() {
    let mut chart = Chart::new(dataset(), RenderOptions::default());
    let mut toggles: CityToggles = chart.toggles();
    assert!(toggles.all_checked());

    toggles.set("Houston", false);
    assert!(!toggles.all_checked());
    chart.apply_toggles(&toggles);
    assert_eq!(chart.scene().cities(), vec!["Charlotte", "Seattle"]);

    toggles.set("Houston", true);
    assert!(toggles.all_checked());

    toggles.set_all(false);
    assert!(!toggles.is_checked("Seattle"));
    assert!(chart.apply_toggles(&toggles).is_empty());

    toggles.set_all(true);
    chart.apply_toggles(&toggles);
    assert_eq!(chart.scene().cities().len(), 3);
    assert!(!toggles.set("Atlantis", true));
}

#[test]
fn city_without_any_temperature_has_legend_but_no_path() {
    let mut rows = dataset().rows().to_vec();
    rows.push(Observation::new(jan(1), "Reno", f64::NAN));
    rows.push(Observation::new(jan(3), "Reno", f64::NAN));
    let chart = Chart::new(Dataset::new(rows), RenderOptions::default());

    assert_eq!(chart.scene().cities(), vec!["Houston", "Charlotte", "Seattle"]);
    assert!(chart.scene().path("Reno").is_none());
    assert!(chart.scene().legend.iter().any(|e| e.city == "Reno"));
    assert!(!chart.to_svg().contains("d=\"\""));
}

#[test]
fn series_dates_stay_inside_dataset_extent() {
    let chart = Chart::new(dataset(), RenderOptions::default());
    let (lo, hi) = chart.dataset().date_extent().expect("extent");
    let frame = chart.frame().expect("drawn");
    for s in &frame.series {
        let first = s.points.first().expect("non-empty series").date;
        let last = s.points.last().expect("non-empty series").date;
        assert!(lo <= first && last <= hi, "{} spans {first}..{last} outside {lo}..{hi}", s.city);
    }
    let (x0, x1) = frame.scales.x.domain();
    assert!(lo <= x0 && x1 <= hi);
}

#[test]
fn changing_options_redraws_at_new_size_and_theme() {
    let mut chart = Chart::new(dataset(), RenderOptions::default());
    assert!(chart.pointer_move(100.0, 50.0).is_visible());

    let opts = RenderOptions { width: 600, theme: weather_core::Theme::dark(), ..RenderOptions::default() };
    let scene = chart.set_options(opts).clone();
    assert_eq!(scene.width, 600);
    assert_eq!(scene.plot_size().width, 500.0);
    let bottom = scene.axes.iter().find(|a| a.orient == Orient::Bottom).expect("bottom");
    assert_eq!(bottom.to.0, 500.0);
    assert!(!chart.tooltip().is_visible());
    assert!(chart.to_svg().contains("fill=\"#121214\""));

    let t = chart.pointer_move(490.0, 50.0).tooltip().cloned().expect("rearmed");
    assert!(t.bounds.right <= 490.0, "flips left on the narrower surface");
}
