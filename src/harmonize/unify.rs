use anyhow::{Context, Result};

use super::normalize::KeyNormalizer;
use super::reshape::{indicator_code_for_column, MeltedCell};
use crate::config::WideSourceConfig;
use crate::model::Observation;

/// Constant columns stamped on every row of a reshaped batch
#[derive(Debug, Clone, Copy)]
pub struct BatchStamp<'a> {
    pub year: i32,
    pub data_source: &'a str,
    pub unit_measure: &'a str,
    pub indicator_prefix: &'a str,
}

impl<'a> BatchStamp<'a> {
    pub fn new(spec: &'a WideSourceConfig, unit_measure: &'a str, indicator_prefix: &'a str) -> Self {
        Self {
            year: spec.year,
            data_source: &spec.data_source,
            unit_measure,
            indicator_prefix,
        }
    }
}

/// Conform a melted wide batch to the canonical six columns
pub fn conform_wide(
    melted: Vec<MeltedCell>,
    stamp: BatchStamp<'_>,
    normalizer: &mut KeyNormalizer,
) -> Result<Vec<Observation>> {
    melted
        .into_iter()
        .map(|cell| -> Result<Observation> {
            let country_code = normalizer
                .country_code(&cell.key)
                .with_context(|| format!("while normalizing batch {}", stamp.data_source))?;
            Ok(Observation {
                indicator_code: indicator_code_for_column(stamp.indicator_prefix, &cell.variable),
                country_code,
                time_period: Some(stamp.year),
                obs_value: cell.value.as_number(),
                unit_measure: stamp.unit_measure.to_string(),
                data_source: stamp.data_source.to_string(),
            })
        })
        .collect()
}

/// Union conformed batches in order, keeping every row
pub fn concat(batches: Vec<Vec<Observation>>) -> Vec<Observation> {
    let total = batches.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for batch in batches {
        out.extend(batch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookupPolicy;
    use crate::parser::CellValue;

    fn cell(key: &str, variable: &str, value: CellValue) -> MeltedCell {
        MeltedCell {
            key: key.into(),
            variable: variable.into(),
            value,
        }
    }

    #[test]
    fn test_conform_wide_stamps_provenance() {
        let spec = WideSourceConfig::spreadsheet_2018();
        let stamp = BatchStamp::new(&spec, "COUNT", "MARINE_POLLUTION_");
        let mut normalizer = KeyNormalizer::new(LookupPolicy::Passthrough);

        let rows = conform_wide(
            vec![
                cell("Fiji", "Plastics", CellValue::Number(10.0)),
                cell("Atlantis", "Metals", CellValue::Text("-".into())),
            ],
            stamp,
            &mut normalizer,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].indicator_code, "MARINE_POLLUTION_PLASTICS");
        assert_eq!(rows[0].country_code, "FJ");
        assert_eq!(rows[0].obs_value, Some(10.0));
        for row in &rows {
            assert_eq!(row.time_period, Some(2018));
            assert_eq!(row.data_source, "SPREP (2018)");
            assert_eq!(row.unit_measure, "COUNT");
        }
        assert_eq!(rows[1].country_code, "Atlantis");
        assert_eq!(rows[1].obs_value, None);
    }

    #[test]
    fn test_conform_wide_strict_miss_fails() {
        let spec = WideSourceConfig::csv_2015();
        let stamp = BatchStamp::new(&spec, "COUNT", "MARINE_POLLUTION_");
        let mut normalizer = KeyNormalizer::new(LookupPolicy::Strict);
        let result = conform_wide(
            vec![cell("Atlantis", "Metals", CellValue::Number(1.0))],
            stamp,
            &mut normalizer,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_concat_keeps_duplicates_in_order() {
        let obs = |source: &str| Observation {
            indicator_code: "MARINE_POLLUTION_PLASTICS".into(),
            country_code: "FJ".into(),
            time_period: Some(2018),
            obs_value: Some(1.0),
            unit_measure: "COUNT".into(),
            data_source: source.into(),
        };
        let all = concat(vec![vec![obs("a")], vec![], vec![obs("b"), obs("b")]]);
        let sources: Vec<_> = all.iter().map(|o| o.data_source.as_str()).collect();
        assert_eq!(sources, vec!["a", "b", "b"]);
    }
}
