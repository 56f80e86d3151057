// File: crates/weather-core/src/error.rs
// Summary: Error types for dataset loading and tooltip resolution.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed table")]
    Csv(#[from] csv::Error),
    #[error("no {kind} column (looked for {candidates:?})")]
    MissingColumn { kind: &'static str, candidates: Vec<String> },
}

/// Internal failures while resolving a tooltip. These never reach the caller
/// of `Chart::pointer_move`; they only hide the tooltip.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TooltipError {
    #[error("pointer position is not finite: ({x}, {y})")]
    NonFinitePointer { x: f32, y: f32 },
    #[error("inverted pointer date is not finite")]
    NonFiniteDate,
    #[error("series for {city} is not in date order (lookup at day {target})")]
    UnorderedSeries { city: String, target: f64 },
}
