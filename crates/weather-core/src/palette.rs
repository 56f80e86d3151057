// File: crates/weather-core/src/palette.rs
// Summary: Stable city -> color assignment over the Tableau10 qualitative palette.

use crate::observation::CityId;
use crate::types::Rgba;

/// Tableau10 (classic ordering).
pub const TABLEAU10: [Rgba; 10] = [
    Rgba::rgb(0x4e, 0x79, 0xa7),
    Rgba::rgb(0xf2, 0x8e, 0x2c),
    Rgba::rgb(0xe1, 0x57, 0x59),
    Rgba::rgb(0x76, 0xb7, 0xb2),
    Rgba::rgb(0x59, 0xa1, 0x4f),
    Rgba::rgb(0xed, 0xc9, 0x49),
    Rgba::rgb(0xaf, 0x7a, 0xa1),
    Rgba::rgb(0xff, 0x9d, 0xa7),
    Rgba::rgb(0x9c, 0x75, 0x5f),
    Rgba::rgb(0xba, 0xb0, 0xab),
];

/// Color per city, fixed for the lifetime of a session. Built from the full
/// known city set so selection changes never shift colors.
#[derive(Clone, Debug, Default)]
pub struct ColorMap {
    entries: Vec<(CityId, Rgba)>,
}

impl ColorMap {
    pub fn new(known: &[CityId]) -> Self {
        Self::with_palette(known, &TABLEAU10)
    }

    /// Assign colors in known order, cycling through `palette`.
    pub fn with_palette(known: &[CityId], palette: &[Rgba]) -> Self {
        let mut entries: Vec<(CityId, Rgba)> = Vec::with_capacity(known.len());
        if palette.is_empty() { return Self { entries }; }
        for city in known {
            if entries.iter().any(|(c, _)| c == city) { continue; }
            let color = palette[entries.len() % palette.len()];
            entries.push((city.clone(), color));
        }
        Self { entries }
    }

    pub fn get(&self, city: &str) -> Option<Rgba> {
        self.entries.iter().find(|(c, _)| c == city).map(|(_, color)| *color)
    }

    /// Color for `city`; unknown cities get the first palette entry.
    pub fn color(&self, city: &str) -> Rgba {
        self.get(city).unwrap_or(TABLEAU10[0])
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
