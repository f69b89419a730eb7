use std::collections::HashSet;
use tracing::debug;

use crate::model::Observation;

/// Drops rows whose indicator code is in the exclusion set
#[derive(Debug, Clone)]
pub struct IndicatorFilter {
    excluded: HashSet<String>,
}

impl IndicatorFilter {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, code: &str) -> bool {
        self.excluded.contains(code)
    }

    /// Keep only rows with a supported indicator
    pub fn apply(&self, rows: Vec<Observation>) -> Vec<Observation> {
        let before = rows.len();
        let kept: Vec<Observation> = rows
            .into_iter()
            .filter(|r| !self.is_excluded(&r.indicator_code))
            .collect();
        debug!(dropped = before - kept.len(), "filtered excluded indicators");
        kept
    }
}
