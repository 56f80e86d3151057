// File: crates/weather-core/tests/loader.rs
// Purpose: Validate table loading: column aliases, NaN coercion, trimming, and failure modes.

use chrono::NaiveDate;
use weather_core::loader::{self, LoadOptions};
use weather_core::LoadError;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const TABLE: &str = "\
date,city,actual_mean_temp,actual_precipitation
2014-07-01, Charlotte ,81,0.00
2014-07-02,Charlotte,,0.12
2014-07-03,Charlotte,n/a,T
2014-07-01,Houston,85,
not-a-date,Houston,80,0.00
";

#[test]
fn coerces_fields_and_keeps_rows_with_bad_temperature() {
    let loaded = loader::from_reader(TABLE.as_bytes(), &LoadOptions::default()).expect("load");
    let rows = loaded.dataset.rows();

    assert_eq!(loaded.report.rows, 4);
    assert_eq!(loaded.report.skipped_dates, 1);
    assert_eq!(loaded.report.missing_temperatures, 2);

    assert_eq!(rows[0].city, "Charlotte", "city must be trimmed");
    assert_eq!(rows[0].date, ymd(2014, 7, 1));
    assert_eq!(rows[0].temperature, 81.0);
    assert_eq!(rows[0].precipitation, Some(0.0));

    // empty temperature is missing, never zero
    assert!(rows[1].temperature.is_nan());
    assert_eq!(rows[1].precipitation, Some(0.12));

    assert!(rows[2].temperature.is_nan());
    assert!(rows[2].precipitation.map_or(false, f64::is_nan), "trace marker is not a number");

    assert_eq!(rows[3].city, "Houston");
    assert_eq!(rows[3].precipitation, None);
}

#[test]
fn known_cities_follow_first_appearance() {
    let loaded = loader::from_reader(TABLE.as_bytes(), &LoadOptions::default()).expect("load");
    assert_eq!(loaded.dataset.cities(), vec!["Charlotte".to_string(), "Houston".to_string()]);
    assert_eq!(loaded.dataset.date_extent(), Some((ymd(2014, 7, 1), ymd(2014, 7, 3))));
}

#[test]
fn alternate_temperature_header_and_date_formats() {
    let table = "Date,City,Mean_Temperature_F\n07/04/2014,Phoenix,95.5\n2014/07/05,Phoenix,96\n2014-07-06T00:00:00,Phoenix,97\n";
    let loaded = loader::from_reader(table.as_bytes(), &LoadOptions::default()).expect("load");
    let dates = loaded.dataset.rows().iter().map(|r| r.date).collect::<Vec<_>>();
    assert_eq!(dates, vec![ymd(2014, 7, 4), ymd(2014, 7, 5), ymd(2014, 7, 6)]);
    assert_eq!(loaded.dataset.rows()[0].temperature, 95.5);
    assert!(loaded.dataset.rows().iter().all(|r| r.precipitation.is_none()));
}

#[test]
fn custom_delimiter_and_aliases() {
    let table = "day;station;t\n2015-01-01;Oslo;-3.5\n";
    let opts = LoadOptions {
        temperature_columns: vec!["t".to_string()],
        delimiter: b';',
        ..LoadOptions::default()
    };
    let loaded = loader::from_reader(table.as_bytes(), &opts).expect("load");
    assert_eq!(loaded.dataset.len(), 1);
    assert_eq!(loaded.dataset.rows()[0].temperature, -3.5);
    assert_eq!(loaded.dataset.rows()[0].city, "Oslo");
}

#[test]
fn missing_temperature_column_fails_whole_load() {
    let table = "date,city,max_temp\n2014-07-01,Charlotte,90\n";
    let err = loader::from_reader(table.as_bytes(), &LoadOptions::default()).unwrap_err();
    match err {
        LoadError::MissingColumn { kind, .. } => assert_eq!(kind, "temperature"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unreachable_file_leaves_empty_dataset() {
    let path = std::path::Path::new("target/test_out/does-not-exist.csv");
    assert!(matches!(loader::from_path(path, &LoadOptions::default()), Err(LoadError::Open { .. })));
    let ds = loader::load_or_empty(path, &LoadOptions::default());
    assert!(ds.is_empty());
}

#[test]
fn number_and_date_parsing_helpers() {
    assert_eq!(loader::parse_number(" 42.5 "), 42.5);
    assert!(loader::parse_number("").is_nan());
    assert!(loader::parse_number("abc").is_nan());
    assert_eq!(loader::parse_date("2014-12-31"), Some(ymd(2014, 12, 31)));
    assert_eq!(loader::parse_date("2014-02-30"), None);
    assert_eq!(loader::parse_date(""), None);
}

#[test]
fn invalid_utf8_in_one_row_keeps_every_row() {
    let table: &[u8] = b"date,city,actual_mean_temp\n2014-07-01,Charlotte,81\n2014-07-02,S\xE3o Paulo,75\n2014-07-03,Charlotte,83\n";
    let loaded = loader::from_reader(table, &LoadOptions::default()).expect("load");
    assert_eq!(loaded.report.rows, 3);
    let rows = loaded.dataset.rows();
    assert_eq!(rows[1].city, "S\u{FFFD}o Paulo");
    assert_eq!(rows[1].temperature, 75.0);
    assert_eq!(rows[2].temperature, 83.0);
    assert_eq!(loaded.dataset.cities().len(), 2);
}
