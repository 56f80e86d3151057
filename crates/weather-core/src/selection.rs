// File: crates/weather-core/src/selection.rs
// Summary: Selected-city set and the per-city toggle panel it is derived from.

use crate::observation::CityId;

/// Cities chosen for display, ordered by the known-city order.
/// Contract: always a subset of the known city set it was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    cities: Vec<CityId>,
}

impl Selection {
    /// Keep the requested ids that are known, in known order. Unknown ids are dropped.
    pub fn new<S: AsRef<str>>(known: &[CityId], requested: &[S]) -> Self {
        for r in requested {
            if !known.iter().any(|k| k == r.as_ref()) {
                log::warn!("ignoring unknown city {:?} in selection", r.as_ref());
            }
        }
        let cities = known
            .iter()
            .filter(|k| requested.iter().any(|r| r.as_ref() == k.as_str()))
            .cloned()
            .collect();
        Self { cities }
    }

    pub fn all(known: &[CityId]) -> Self {
        let mut cities: Vec<CityId> = Vec::with_capacity(known.len());
        for k in known {
            if !cities.contains(k) { cities.push(k.clone()); }
        }
        Self { cities }
    }

    pub fn none() -> Self { Self::default() }

    pub fn contains(&self, city: &str) -> bool { self.cities.iter().any(|c| c == city) }

    pub fn iter(&self) -> impl Iterator<Item = &CityId> { self.cities.iter() }

    pub fn len(&self) -> usize { self.cities.len() }

    pub fn is_empty(&self) -> bool { self.cities.is_empty() }

    pub fn is_subset_of(&self, other: &Selection) -> bool {
        self.cities.iter().all(|c| other.contains(c))
    }
}

/// One checkbox per known city plus a "select all" box.
#[derive(Clone, Debug)]
pub struct CityToggles {
    entries: Vec<(CityId, bool)>,
    select_all: bool,
}

impl CityToggles {
    /// Every city starts checked.
    pub fn new(known: &[CityId]) -> Self {
        let entries = Selection::all(known).cities.into_iter().map(|c| (c, true)).collect::<Vec<_>>();
        let select_all = !entries.is_empty();
        Self { entries, select_all }
    }

    /// Set a single city. Returns false when the city is unknown.
    pub fn set(&mut self, city: &str, on: bool) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|(c, _)| c == city) else {
            return false;
        };
        entry.1 = on;
        self.select_all = self.entries.iter().all(|(_, checked)| *checked);
        true
    }

    pub fn set_all(&mut self, on: bool) {
        for (_, checked) in &mut self.entries {
            *checked = on;
        }
        self.select_all = on && !self.entries.is_empty();
    }

    pub fn is_checked(&self, city: &str) -> bool {
        self.entries.iter().any(|(c, checked)| c == city && *checked)
    }

    /// State of the "select all" box.
    pub fn all_checked(&self) -> bool { self.select_all }

    pub fn selection(&self) -> Selection {
        Selection {
            cities: self.entries.iter().filter(|(_, on)| *on).map(|(c, _)| c.clone()).collect(),
        }
    }
}
