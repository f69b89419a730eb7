use serde::Serialize;
use std::collections::BTreeMap;

use super::{latest_means, yearly_means};
use crate::model::UnifiedTable;
use crate::schema::{country_for_name, MARINE_PROTECTION_LABEL, PLASTIC_WASTE_LABEL};

/// The largest marine pollution category reported for a country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantPollution {
    pub country: String,
    pub indicator_label: String,
    pub time_period: i32,
    pub obs_value: f64,
}

/// Per country, the marine pollution category with the highest latest value.
///
/// Categories are the indicators whose code starts with `prefix`, the prefix
/// the wide survey columns were ingested under. Each (country, category)
/// contributes its latest year, duplicates averaged. Ties go to the
/// alphabetically first label. Sorted by value, descending.
pub fn dominant_pollution(table: &UnifiedTable, prefix: &str) -> Vec<DominantPollution> {
    let mut by_label: BTreeMap<&str, Vec<_>> = BTreeMap::new();
    for row in table
        .iter()
        .filter(|r| r.indicator_code().starts_with(prefix))
    {
        by_label.entry(row.indicator_label.as_str()).or_default().push(row);
    }

    let mut best: BTreeMap<String, DominantPollution> = BTreeMap::new();
    for (label, rows) in by_label {
        let means = yearly_means(rows);
        for (country, (year, value)) in latest_means(&means) {
            let replace = best
                .get(country)
                .map(|current| value > current.obs_value)
                .unwrap_or(true);
            if replace {
                best.insert(
                    country.to_string(),
                    DominantPollution {
                        country: country.to_string(),
                        indicator_label: label.to_string(),
                        time_period: year,
                        obs_value: value,
                    },
                );
            }
        }
    }

    let mut out: Vec<_> = best.into_values().collect();
    out.sort_by(|a, b| {
        b.obs_value
            .total_cmp(&a.obs_value)
            .then_with(|| a.country.cmp(&b.country))
    });
    out
}

/// Plastic pollution against marine protection for one country-year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskPoint {
    pub country: String,
    pub time_period: i32,
    pub plastic: f64,
    pub protection: f64,
    /// `plastic / (protection + 1)`
    pub risk_score: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RiskPoint {
    pub fn is_mappable(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Inner join of plastic waste and marine protected area coverage on
/// (country, year), each side averaged per key first. Sorted by country, year.
pub fn protection_risk(table: &UnifiedTable) -> Vec<RiskPoint> {
    let plastic = yearly_means(table.with_label(PLASTIC_WASTE_LABEL));
    let protection = yearly_means(table.with_label(MARINE_PROTECTION_LABEL));

    plastic
        .into_iter()
        .filter_map(|((country, year), plastic)| {
            let protection = *protection.get(&(country.clone(), year))?;
            let risk_score = plastic / (protection + 1.0);
            if !risk_score.is_finite() {
                return None;
            }
            let coords = country_for_name(&country).map(|c| c.coords());
            Some(RiskPoint {
                time_period: year,
                plastic,
                protection,
                risk_score,
                latitude: coords.map(|c| c.0),
                longitude: coords.map(|c| c.1),
                country,
            })
        })
        .collect()
}
