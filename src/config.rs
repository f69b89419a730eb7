//! Harmonizer configuration.
//!
//! Defaults describe the three survey files as published. A JSON file can
//! override any field; CLI flags override the file.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::schema::{EXCLUDED_INDICATORS, MARINE_POLLUTION_PREFIX};

/// What to do when a static lookup has no entry for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// Keep the raw value, say nothing
    Passthrough,
    /// Keep the raw value, log each distinct miss once
    #[default]
    Warn,
    /// Fail the load
    Strict,
}

/// The pre-cleaned long-format table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongSourceConfig {
    pub file: String,
}

impl Default for LongSourceConfig {
    fn default() -> Self {
        Self {
            file: "data_clean.csv".into(),
        }
    }
}

/// A wide single-year snapshot keyed by country name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideSourceConfig {
    pub file: String,
    /// Worksheet to read when the file is a workbook
    pub sheet: Option<String>,
    pub key_column: String,
    pub year: i32,
    pub data_source: String,
}

impl WideSourceConfig {
    pub fn spreadsheet_2018() -> Self {
        Self {
            file: "20180920_Marine_Pollution.xlsx".into(),
            sheet: Some("Sheet1".into()),
            key_column: "Countries".into(),
            year: 2018,
            data_source: "SPREP (2018)".into(),
        }
    }

    pub fn csv_2015() -> Self {
        Self {
            file: "ENV_Marine_Pollution_Obs_data_v4.csv".into(),
            sheet: None,
            key_column: "Row Labels".into(),
            year: 2015,
            data_source: "SPREP (2015)".into(),
        }
    }
}

/// Fields of a [`WideSourceConfig`] given in a config file. Anything left out
/// keeps the value of the source's built-in default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WideSourceOverride {
    file: Option<String>,
    sheet: Option<String>,
    key_column: Option<String>,
    year: Option<i32>,
    data_source: Option<String>,
}

impl WideSourceOverride {
    fn apply(self, base: WideSourceConfig) -> WideSourceConfig {
        WideSourceConfig {
            file: self.file.unwrap_or(base.file),
            sheet: self.sheet.or(base.sheet),
            key_column: self.key_column.unwrap_or(base.key_column),
            year: self.year.unwrap_or(base.year),
            data_source: self.data_source.unwrap_or(base.data_source),
        }
    }
}

fn spreadsheet_over_default<'de, D: Deserializer<'de>>(d: D) -> Result<WideSourceConfig, D::Error> {
    Ok(WideSourceOverride::deserialize(d)?.apply(WideSourceConfig::spreadsheet_2018()))
}

fn wide_csv_over_default<'de, D: Deserializer<'de>>(d: D) -> Result<WideSourceConfig, D::Error> {
    Ok(WideSourceOverride::deserialize(d)?.apply(WideSourceConfig::csv_2015()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonizerConfig {
    pub long_table: LongSourceConfig,
    #[serde(deserialize_with = "spreadsheet_over_default")]
    pub spreadsheet: WideSourceConfig,
    #[serde(deserialize_with = "wide_csv_over_default")]
    pub wide_csv: WideSourceConfig,
    /// Unit stamped on every reshaped row
    pub unit_measure: String,
    /// Prepended to wide-file column headers to form indicator codes
    pub indicator_prefix: String,
    pub excluded_indicators: Vec<String>,
    pub lookup_policy: LookupPolicy,
}

impl Default for HarmonizerConfig {
    fn default() -> Self {
        Self {
            long_table: LongSourceConfig::default(),
            spreadsheet: WideSourceConfig::spreadsheet_2018(),
            wide_csv: WideSourceConfig::csv_2015(),
            unit_measure: "COUNT".into(),
            indicator_prefix: MARINE_POLLUTION_PREFIX.into(),
            excluded_indicators: EXCLUDED_INDICATORS.iter().map(|s| s.to_string()).collect(),
            lookup_policy: LookupPolicy::default(),
        }
    }
}

impl HarmonizerConfig {
    /// Load from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {:?}", path))?;
                Self::from_json(&text).with_context(|| format!("Invalid config: {:?}", path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse config JSON")
    }

    pub fn with_lookup_policy(mut self, policy: Option<LookupPolicy>) -> Self {
        if let Some(policy) = policy {
            self.lookup_policy = policy;
        }
        self
    }

    /// Both wide batches, in concatenation order
    pub fn wide_sources(&self) -> [&WideSourceConfig; 2] {
        [&self.spreadsheet, &self.wide_csv]
    }
}
