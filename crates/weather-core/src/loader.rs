// File: crates/weather-core/src/loader.rs
// Summary: Load a delimited weather table into a Dataset with strict per-field coercion.
// Notes:
// - Columns are located by alias lists so deployments with different header
//   names ("actual_mean_temp", "mean_temperature_f", ...) load unchanged.
// - A bad temperature never drops a row; it becomes NaN. A bad date does.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::LoadError;
use crate::observation::{Dataset, Observation};

/// Column aliases and reader settings.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub date_columns: Vec<String>,
    pub city_columns: Vec<String>,
    pub temperature_columns: Vec<String>,
    pub precipitation_columns: Vec<String>,
    pub delimiter: u8,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            date_columns: owned(&["date", "datetime", "day"]),
            city_columns: owned(&["city", "station", "location"]),
            temperature_columns: owned(&[
                "actual_mean_temp",
                "mean_temperature_f",
                "mean_temp",
                "temperature",
                "temp",
            ]),
            precipitation_columns: owned(&["actual_precipitation", "precipitation", "precip", "prcp"]),
            delimiter: b',',
        }
    }
}

/// Row accounting for one load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows kept in the dataset.
    pub rows: usize,
    /// Rows dropped because the date did not parse.
    pub skipped_dates: usize,
    /// Kept rows whose temperature became NaN.
    pub missing_temperatures: usize,
}

#[derive(Debug)]
pub struct Loaded {
    pub dataset: Dataset,
    pub report: LoadReport,
}

/// Load from a file path.
pub fn from_path(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<Loaded, LoadError> {
    let path = path.as_ref();
    let mut rdr = reader_builder(opts)
        .from_path(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    let loaded = load_with(&mut rdr, opts)?;
    log::info!(
        "loaded {} rows from {} ({} skipped, {} without temperature)",
        loaded.report.rows,
        path.display(),
        loaded.report.skipped_dates,
        loaded.report.missing_temperatures
    );
    Ok(loaded)
}

/// Load from any reader (in-memory tables, stdin, ...).
pub fn from_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<Loaded, LoadError> {
    let mut rdr = reader_builder(opts).from_reader(reader);
    load_with(&mut rdr, opts)
}

/// Load, or log the failure and return an empty dataset so the chart stays blank.
pub fn load_or_empty(path: impl AsRef<Path>, opts: &LoadOptions) -> Dataset {
    let path = path.as_ref();
    match from_path(path, opts) {
        Ok(loaded) => loaded.dataset,
        Err(e) => {
            log::error!("error loading {}: {e}", path.display());
            Dataset::empty()
        }
    }
}

fn reader_builder(opts: &LoadOptions) -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true)
        .delimiter(opts.delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers);
    b
}

struct Columns {
    date: usize,
    city: usize,
    temperature: usize,
    precipitation: Option<usize>,
}

fn resolve_columns(headers: &[String], opts: &LoadOptions) -> Result<Columns, LoadError> {
    let idx = |names: &[String]| -> Option<usize> {
        names.iter().find_map(|want| headers.iter().position(|h| h.eq_ignore_ascii_case(want)))
    };
    let need = |names: &[String], kind: &'static str| -> Result<usize, LoadError> {
        idx(names).ok_or_else(|| LoadError::MissingColumn { kind, candidates: names.to_vec() })
    };
    Ok(Columns {
        date: need(&opts.date_columns, "date")?,
        city: need(&opts.city_columns, "city")?,
        temperature: need(&opts.temperature_columns, "temperature")?,
        precipitation: idx(&opts.precipitation_columns),
    })
}

fn load_with<R: Read>(rdr: &mut csv::Reader<R>, opts: &LoadOptions) -> Result<Loaded, LoadError> {
    let headers = rdr
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect::<Vec<_>>();
    log::debug!("headers: {headers:?}");
    let cols = resolve_columns(&headers, opts)?;

    let mut rows = Vec::new();
    let mut report = LoadReport::default();

    // invalid UTF-8 is decoded lossily per field, never rejected
    for (line, rec) in rdr.byte_records().enumerate() {
        let rec = rec?;
        let fields = rec.iter().map(String::from_utf8_lossy).collect::<Vec<_>>();
        let field = |i: usize| fields.get(i).map_or("", |f| &**f);

        let Some(date) = parse_date(field(cols.date)) else {
            log::warn!("row {}: unparseable date {:?}, skipped", line + 2, field(cols.date));
            report.skipped_dates += 1;
            continue;
        };
        let temperature = parse_number(field(cols.temperature));
        if !temperature.is_finite() {
            report.missing_temperatures += 1;
        }
        let precipitation = cols.precipitation.and_then(|i| parse_optional(field(i)));

        rows.push(Observation {
            date,
            city: field(cols.city).trim().to_string(),
            temperature,
            precipitation,
        });
    }
    report.rows = rows.len();
    Ok(Loaded { dataset: Dataset::new(rows), report })
}

/// Numeric coercion: trimmed parse, anything else is NaN (never zero).
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Optional numeric field: empty means absent, garbage (e.g. "T" for trace) means NaN.
fn parse_optional(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(parse_number(s)) }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Naive calendar date; datetime strings keep only their leading `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    s.get(..10).and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}
