use super::lookup::MissLog;
use crate::config::LookupPolicy;
use crate::error::HarmonizeError;
use crate::model::{EnrichedObservation, Observation};
use crate::schema::{country_for_code, indicator_label};

/// Attaches the indicator label and the country display name
#[derive(Debug)]
pub struct LabelEnricher {
    labels: MissLog,
    countries: MissLog,
}

impl LabelEnricher {
    pub fn new(policy: LookupPolicy) -> Self {
        Self {
            labels: MissLog::new("indicator labels", policy),
            countries: MissLog::new("country names", policy),
        }
    }

    /// Label for `code`, or the code itself on a lenient miss
    pub fn label(&mut self, code: &str) -> Result<String, HarmonizeError> {
        self.labels
            .resolve(code, indicator_label(code), HarmonizeError::UnmappedIndicator)
    }

    /// Display name for `code`, or the code itself on a lenient miss
    pub fn country_name(&mut self, code: &str) -> Result<String, HarmonizeError> {
        self.countries.resolve(
            code,
            country_for_code(code).map(|c| c.name),
            HarmonizeError::UnmappedCountryCode,
        )
    }

    pub fn enrich(
        &mut self,
        rows: Vec<Observation>,
    ) -> Result<Vec<EnrichedObservation>, HarmonizeError> {
        rows.into_iter()
            .map(|observation| -> Result<EnrichedObservation, HarmonizeError> {
                let indicator_label = self.label(&observation.indicator_code)?;
                let country_name = self.country_name(&observation.country_code)?;
                Ok(EnrichedObservation {
                    observation,
                    indicator_label,
                    country_name,
                })
            })
            .collect()
    }

    pub fn label_misses(&self) -> Vec<&str> {
        self.labels.misses()
    }

    pub fn country_misses(&self) -> Vec<&str> {
        self.countries.misses()
    }
}
