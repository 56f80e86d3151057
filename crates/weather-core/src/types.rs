// File: crates/weather-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, plot area).

/// Default surface width in pixels.
pub const WIDTH: i32 = 900;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // room below for rotated month labels, left for the value axis title
        Self::new(70, 30, 50, 100)
    }
}

/// Size of the plot area (surface minus insets) in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotSize {
    pub width: f32,
    pub height: f32,
}

impl PlotSize {
    pub fn from_surface(width: i32, height: i32, insets: &Insets) -> Self {
        Self {
            width: (width - insets.hsum() as i32).max(1) as f32,
            height: (height - insets.vsum() as i32).max(1) as f32,
        }
    }

    /// True when `(x, y)` lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

/// Straight RGBA color, renderer-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#')?;
        if h.len() != 6 { return None; }
        let v = u32::from_str_radix(h, 16).ok()?;
        Some(Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 { self.a as f32 / 255.0 }
}
