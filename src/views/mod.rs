//! Tabular data products derived from the unified table.
//!
//! These are the frames a presentation layer plots: indicator options, the
//! latest-value map, per-country trends, the dominant pollution type and the
//! plastic-vs-protection risk table. Every view ignores rows without both a
//! year and a value, groups by country display name, and averages duplicate
//! (country, year) observations.

pub mod pollution;
pub mod selection;

pub use pollution::*;
pub use selection::*;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{EnrichedObservation, UnifiedTable};

/// Mean value per (country, year), ignoring rows missing either field
pub(crate) fn yearly_means<'a>(
    rows: impl IntoIterator<Item = &'a EnrichedObservation>,
) -> BTreeMap<(String, i32), f64> {
    let mut acc: BTreeMap<(String, i32), (f64, usize)> = BTreeMap::new();
    for row in rows {
        if let Some((year, value)) = row.measurement() {
            let entry = acc.entry((row.country_name.clone(), year)).or_default();
            entry.0 += value;
            entry.1 += 1;
        }
    }
    acc.into_iter()
        .map(|(key, (sum, n))| (key, sum / n as f64))
        .collect()
}

/// Latest (year, mean) per country
pub(crate) fn latest_means(means: &BTreeMap<(String, i32), f64>) -> BTreeMap<&str, (i32, f64)> {
    let mut latest = BTreeMap::new();
    // keys are ordered by (country, year) so later years overwrite earlier ones
    for ((country, year), value) in means {
        latest.insert(country.as_str(), (*year, *value));
    }
    latest
}

/// Everything derived for one selected indicator
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorReport {
    pub indicator: String,
    pub code: String,
    pub description: &'static str,
    pub average_latest: Option<f64>,
    pub map: Vec<MapPoint>,
    pub trend: Trend,
    pub dominant_pollution: Vec<DominantPollution>,
    pub protection_risk: Vec<RiskPoint>,
}

impl IndicatorReport {
    /// Build all views for `label`; `None` when no row carries that label.
    /// `pollution_prefix` selects the categories of the dominant-pollution view.
    pub fn build(table: &UnifiedTable, label: &str, pollution_prefix: &str) -> Option<Self> {
        let selection = IndicatorSelection::new(table, label)?;
        let map = latest_by_country(&selection);
        Some(Self {
            indicator: selection.label.clone(),
            code: selection.code.clone(),
            description: selection.description,
            average_latest: average_latest(&map),
            trend: trend(&selection),
            map,
            dominant_pollution: dominant_pollution(table, pollution_prefix),
            protection_risk: protection_risk(table),
        })
    }
}
