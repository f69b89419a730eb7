//! The harmonization pipeline.
//!
//! Stages run once, in order: read → reshape → normalize keys → unify →
//! filter → enrich. The result is a [`UnifiedTable`]; nothing is cached here
//! (see [`crate::cache::TableCache`] for that).

pub mod enrich;
pub mod lookup;
pub mod normalize;
pub mod reshape;
pub mod unify;

pub use enrich::LabelEnricher;
pub use normalize::KeyNormalizer;
pub use reshape::{indicator_code_for_column, melt, MeltedCell};
pub use unify::{concat, conform_wide, BatchStamp};

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::config::HarmonizerConfig;
use crate::filter::IndicatorFilter;
use crate::model::UnifiedTable;
use crate::source::{read_long_table, read_wide};
use crate::ui::{Phase, Ui};

/// Runs the pipeline over the files in one data directory
#[derive(Debug, Clone)]
pub struct Harmonizer {
    config: HarmonizerConfig,
    data_dir: PathBuf,
}

impl Harmonizer {
    pub fn new(config: HarmonizerConfig, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            data_dir: data_dir.into(),
        }
    }

    pub fn config(&self) -> &HarmonizerConfig {
        &self.config
    }

    /// The three input files: long table, spreadsheet, wide CSV
    pub fn source_paths(&self) -> [PathBuf; 3] {
        [
            self.data_dir.join(&self.config.long_table.file),
            self.data_dir.join(&self.config.spreadsheet.file),
            self.data_dir.join(&self.config.wide_csv.file),
        ]
    }

    /// Build the unified table from scratch
    pub fn run(&self, ui: &mut impl Ui) -> Result<UnifiedTable> {
        let config = &self.config;
        let [long_path, sheet_path, csv_path] = self.source_paths();

        ui.set_phase(Phase::Reading);
        let long = read_long_table(&long_path)?;
        let wide = [
            read_wide(&sheet_path, &config.spreadsheet)?,
            read_wide(&csv_path, &config.wide_csv)?,
        ];

        ui.set_phase(Phase::Reshaping);
        let melted = wide.iter().map(melt).collect::<Vec<_>>();
        for (table, cells) in wide.iter().zip(&melted) {
            ui.log(format!("{}: {} cells after melt", table.source_name, cells.len()));
        }

        ui.set_phase(Phase::Normalizing);
        let mut normalizer = KeyNormalizer::new(config.lookup_policy);
        let mut batches = vec![long];
        for (spec, cells) in config.wide_sources().into_iter().zip(melted) {
            let stamp = BatchStamp::new(spec, &config.unit_measure, &config.indicator_prefix);
            batches.push(conform_wide(cells, stamp, &mut normalizer)?);
        }
        if !normalizer.misses().is_empty() {
            info!(names = ?normalizer.misses(), "country names kept without a code");
        }

        ui.set_phase(Phase::Unifying);
        let unified = concat(batches);
        ui.log(format!("{} rows unified", unified.len()));

        ui.set_phase(Phase::Filtering);
        let filter = IndicatorFilter::new(config.excluded_indicators.iter().cloned());
        let kept = filter.apply(unified);

        ui.set_phase(Phase::Enriching);
        let mut enricher = LabelEnricher::new(config.lookup_policy);
        let rows = enricher
            .enrich(kept)
            .context("Failed to attach display labels")?;
        if !enricher.label_misses().is_empty() {
            info!(codes = ?enricher.label_misses(), "indicators shown by code");
        }

        let table = UnifiedTable::from_rows(rows);
        info!(
            rows = table.len(),
            indicators = table.labels().len(),
            "harmonized"
        );
        ui.set_phase(Phase::Complete);
        Ok(table)
    }
}
