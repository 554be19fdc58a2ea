//! Partial-template filtering for planet listings.
//!
//! A [`PlanetFilter`] carries zero, one, or both of climate/terrain. Fields
//! left unset impose no constraint; set fields must equal the stored value
//! case-insensitively. Blank input (empty or whitespace-only) is normalised
//! to unset at construction, so callers never have to reason about empty
//! strings acting as wildcards.

use crate::models::Planet;

/// Transient match template for `list` queries. Never persisted; `id` and
/// `name` are not part of a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl PlanetFilter {
    /// Build a filter from optional raw inputs, normalising blank values to
    /// `None`.
    pub fn new(climate: Option<&str>, terrain: Option<&str>) -> Self {
        Self {
            climate: normalize(climate),
            terrain: normalize(terrain),
        }
    }

    /// True when no field is populated, i.e. the filter matches every planet.
    pub fn is_unconstrained(&self) -> bool {
        self.climate.is_none() && self.terrain.is_none()
    }

    /// Whether `planet` satisfies this template: every populated field must
    /// equal the stored field under case-insensitive comparison.
    pub fn matches(&self, planet: &Planet) -> bool {
        field_matches(self.climate.as_deref(), &planet.climate)
            && field_matches(self.terrain.as_deref(), &planet.terrain)
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn field_matches(wanted: Option<&str>, stored: &str) -> bool {
    match wanted {
        Some(wanted) => wanted.to_lowercase() == stored.to_lowercase(),
        None => true,
    }
}
