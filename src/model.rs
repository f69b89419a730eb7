//! Observation records and the unified table

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One measurement in the canonical six-column schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "INDICATOR")]
    pub indicator_code: String,
    #[serde(rename = "GEO_PICT")]
    pub country_code: String,
    #[serde(rename = "TIME_PERIOD")]
    pub time_period: Option<i32>,
    #[serde(rename = "OBS_VALUE")]
    pub obs_value: Option<f64>,
    #[serde(rename = "UNIT_MEASURE")]
    pub unit_measure: String,
    #[serde(rename = "DATA_SOURCE")]
    pub data_source: String,
}

/// An observation with its display columns attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedObservation {
    #[serde(flatten)]
    pub observation: Observation,
    #[serde(rename = "INDICATOR_LABEL")]
    pub indicator_label: String,
    #[serde(rename = "Country")]
    pub country_name: String,
}

impl EnrichedObservation {
    pub fn indicator_code(&self) -> &str {
        &self.observation.indicator_code
    }

    pub fn time_period(&self) -> Option<i32> {
        self.observation.time_period
    }

    pub fn obs_value(&self) -> Option<f64> {
        self.observation.obs_value
    }

    /// Year and value, when both are present
    pub fn measurement(&self) -> Option<(i32, f64)> {
        Some((self.observation.time_period?, self.observation.obs_value?))
    }
}

/// The harmonized table. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedTable {
    rows: Vec<EnrichedObservation>,
}

impl UnifiedTable {
    pub fn from_rows(rows: Vec<EnrichedObservation>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[EnrichedObservation] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedObservation> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct indicator labels, sorted
    pub fn labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.indicator_label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows whose display label matches
    pub fn with_label<'a>(
        &'a self,
        label: &'a str,
    ) -> impl Iterator<Item = &'a EnrichedObservation> + 'a {
        self.rows.iter().filter(move |r| r.indicator_label == label)
    }

    /// Indicator code of the first row carrying `label`
    pub fn code_for_label(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.indicator_label == label)
            .map(|r| r.indicator_code())
    }

    /// Rows from one provenance batch
    pub fn from_source<'a>(
        &'a self,
        data_source: &'a str,
    ) -> impl Iterator<Item = &'a EnrichedObservation> + 'a {
        self.rows
            .iter()
            .filter(move |r| r.observation.data_source == data_source)
    }
}

impl<'a> IntoIterator for &'a UnifiedTable {
    type Item = &'a EnrichedObservation;
    type IntoIter = std::slice::Iter<'a, EnrichedObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
