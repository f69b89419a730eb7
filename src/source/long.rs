use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::{debug, info};

use super::source_name;
use crate::error::HarmonizeError;
use crate::model::Observation;
use crate::parser::CellValue;
use crate::schema::canonical_headers;

/// Read the pre-cleaned long-format table.
///
/// The six canonical headers must be present in any order; other columns are
/// ignored. Rows without an indicator code are skipped.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn read_long_table(path: &Path) -> Result<Vec<Observation>> {
    let name = source_name(path);
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open long table: {:?}", path))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("Failed to read header row of {}", name))?
        .clone();
    let positions = column_positions(&headers, &name)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {} at record {}", name, idx))?;
        let cell = |col: usize| CellValue::from_field(record.get(positions[col]).unwrap_or(""));

        let Some(indicator_code) = cell(0).as_text() else {
            skipped += 1;
            continue;
        };

        rows.push(Observation {
            indicator_code,
            country_code: cell(1).as_text().unwrap_or_default(),
            time_period: cell(2).as_year(),
            obs_value: cell(3).as_number(),
            unit_measure: cell(4).as_text().unwrap_or_default(),
            data_source: cell(5).as_text().unwrap_or_default(),
        });
    }

    if skipped > 0 {
        debug!(source = %name, skipped, "skipped rows without an indicator code");
    }
    info!(source = %name, rows = rows.len(), "read long table");
    Ok(rows)
}

/// Index of each canonical header within the file's header row
fn column_positions(headers: &StringRecord, source: &str) -> Result<Vec<usize>> {
    canonical_headers()
        .into_iter()
        .map(|wanted| {
            headers
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| {
                    HarmonizeError::MissingColumn {
                        source_name: source.to_string(),
                        column: wanted,
                    }
                    .into()
                })
        })
        .collect()
}
