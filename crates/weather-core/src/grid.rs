// File: crates/weather-core/src/grid.rs
// Summary: Tick layout helpers: round-number value ticks and calendar month ticks.

use chrono::{Datelike, Months, NaiveDate};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Round half toward positive infinity.
#[inline]
fn round_half_up(v: f64) -> f64 { (v + 0.5).floor() }

/// Returns `(i1, i2, inc)`: tick indices and a signed increment.
/// A negative `inc` means ticks are `i / -inc` (sub-unit steps), otherwise `i * inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * k);
        i2 = round_half_up(stop * k);
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = round_half_up(start / k);
        i2 = round_half_up(stop / k);
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment used by "nice" domain rounding. Zero or non-finite
/// when the span is degenerate.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Absolute distance between adjacent ticks for `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Roughly `count` round-number ticks inside `[start, stop]` (inclusive).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) { return Vec::new(); }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let k = i1 + i as f64;
        out.push(if inc < 0.0 { k / -inc } else { k * inc });
    }
    if reverse { out.reverse(); }
    out
}

/// Decimal places needed to print ticks spaced by `step` without losing digits.
pub fn tick_precision(step: f64) -> usize {
    let s = step.abs();
    if s == 0.0 || !s.is_finite() { return 0; }
    (-s.log10().floor()).max(0.0) as usize
}

/// Format a tick value with fixed precision; negatives use the typographic minus.
pub fn format_tick(v: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, v.abs());
    // "-0" collapses to "0"
    if v < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("\u{2212}{s}")
    } else {
        s
    }
}

/// First day of every calendar month that falls inside `[min, max]`.
pub fn month_ticks(min: NaiveDate, max: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    if max < min { return out; }
    let Some(mut cur) = NaiveDate::from_ymd_opt(min.year(), min.month(), 1) else { return out };
    if cur < min {
        match cur.checked_add_months(Months::new(1)) {
            Some(next) => cur = next,
            None => return out,
        }
    }
    while cur <= max {
        out.push(cur);
        match cur.checked_add_months(Months::new(1)) {
            Some(next) => cur = next,
            None => break,
        }
    }
    out
}
