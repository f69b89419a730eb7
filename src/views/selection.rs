use serde::Serialize;
use std::collections::BTreeMap;

use super::{latest_means, yearly_means};
use crate::model::{EnrichedObservation, UnifiedTable};
use crate::schema::{country_for_name, describe};

/// Sorted distinct indicator labels for the selection control
pub fn indicator_options(table: &UnifiedTable) -> Vec<String> {
    table.labels()
}

/// Rows of one indicator that carry both a year and a value
#[derive(Debug, Clone)]
pub struct IndicatorSelection<'a> {
    pub label: String,
    pub code: String,
    pub description: &'static str,
    rows: Vec<&'a EnrichedObservation>,
}

impl<'a> IndicatorSelection<'a> {
    pub fn new(table: &'a UnifiedTable, label: &str) -> Option<Self> {
        let code = table.code_for_label(label)?.to_string();
        let rows = table
            .iter()
            .filter(|r| r.indicator_label == label && r.measurement().is_some())
            .collect();
        Some(Self {
            label: label.to_string(),
            description: describe(&code),
            code,
            rows,
        })
    }

    pub fn rows(&self) -> &[&'a EnrichedObservation] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Latest value for a country, placed on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub country: String,
    pub time_period: i32,
    pub obs_value: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Latest year per country, duplicates averaged. Countries without
/// coordinates are left off. Sorted by country.
pub fn latest_by_country(selection: &IndicatorSelection<'_>) -> Vec<MapPoint> {
    let means = yearly_means(selection.rows().iter().copied());
    latest_means(&means)
        .into_iter()
        .filter_map(|(country, (year, value))| {
            let (latitude, longitude) = country_for_name(country)?.coords();
            Some(MapPoint {
                country: country.to_string(),
                time_period: year,
                obs_value: value,
                latitude,
                longitude,
            })
        })
        .collect()
}

/// Mean of the latest values, `None` when nothing is mapped
pub fn average_latest(points: &[MapPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().map(|p| p.obs_value).sum::<f64>() / points.len() as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub country: String,
    pub time_period: i32,
    pub obs_value: f64,
}

/// A country with more than one year of data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub country: String,
    /// (year, mean value), ascending by year
    pub values: Vec<(i32, f64)>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trend {
    pub lines: Vec<TrendSeries>,
    pub points: Vec<TrendPoint>,
}

/// Mean per (country, year); multi-year countries become lines, single-year
/// countries become standalone points.
pub fn trend(selection: &IndicatorSelection<'_>) -> Trend {
    let mut by_country: BTreeMap<String, Vec<(i32, f64)>> = BTreeMap::new();
    for ((country, year), value) in yearly_means(selection.rows().iter().copied()) {
        by_country.entry(country).or_default().push((year, value));
    }

    let mut trend = Trend::default();
    for (country, values) in by_country {
        match values.as_slice() {
            [(year, value)] => trend.points.push(TrendPoint {
                country,
                time_period: *year,
                obs_value: *value,
            }),
            _ => trend.lines.push(TrendSeries { country, values }),
        }
    }
    trend
}
