use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Reader};
use csv::{ReaderBuilder, Trim};
use std::path::Path;
use tracing::{debug, info};

use super::source_name;
use crate::config::WideSourceConfig;
use crate::error::HarmonizeError;
use crate::parser::CellValue;

/// One row of a wide snapshot: the country key and one cell per value column
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub key: String,
    pub cells: Vec<CellValue>,
}

/// A wide table: a key column plus one column per indicator
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub source_name: String,
    pub key_column: String,
    pub value_columns: Vec<String>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Build from a header row and data rows.
    ///
    /// Columns with a blank header are dropped, as are rows with no content at
    /// all. Short rows are padded with empty cells.
    pub fn from_grid(
        source_name: &str,
        key_column: &str,
        headers: Vec<String>,
        grid: Vec<Vec<CellValue>>,
    ) -> Result<Self> {
        let key_idx = headers
            .iter()
            .position(|h| h == key_column)
            .ok_or_else(|| HarmonizeError::MissingColumn {
                source_name: source_name.to_string(),
                column: key_column.to_string(),
            })?;

        let value_idx: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(i, h)| *i != key_idx && !h.is_empty())
            .map(|(i, _)| i)
            .collect();
        let value_columns = value_idx.iter().map(|&i| headers[i].clone()).collect();

        let mut rows = Vec::with_capacity(grid.len());
        for raw in grid {
            if raw.iter().all(CellValue::is_empty) {
                continue;
            }
            let cell = |i: usize| raw.get(i).cloned().unwrap_or(CellValue::Empty);
            rows.push(WideRow {
                key: cell(key_idx).as_text().unwrap_or_default(),
                cells: value_idx.iter().map(|&i| cell(i)).collect(),
            });
        }

        Ok(Self {
            source_name: source_name.to_string(),
            key_column: key_column.to_string(),
            value_columns,
            rows,
        })
    }
}

/// Read a wide snapshot. `.csv` files go through the CSV reader, anything else
/// is opened as a workbook.
#[tracing::instrument(level = "debug", skip(path, spec), fields(path = %path.display()))]
pub fn read_wide(path: &Path, spec: &WideSourceConfig) -> Result<WideTable> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let table = if is_csv {
        read_wide_csv(path, &spec.key_column)?
    } else {
        read_wide_workbook(path, spec.sheet.as_deref(), &spec.key_column)?
    };

    info!(
        source = %table.source_name,
        countries = table.rows.len(),
        indicators = table.value_columns.len(),
        "read wide table"
    );
    Ok(table)
}

fn read_wide_csv(path: &Path, key_column: &str) -> Result<WideTable> {
    let name = source_name(path);
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV: {:?}", path))?;

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("Failed to read header row of {}", name))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut grid = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {} at record {}", name, idx))?;
        grid.push(record.iter().map(CellValue::from_field).collect());
    }

    WideTable::from_grid(&name, key_column, headers, grid)
}

fn read_wide_workbook(path: &Path, sheet: Option<&str>, key_column: &str) -> Result<WideTable> {
    let name = source_name(path);
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("Failed to open workbook: {:?}", path))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|s| s.as_str() == wanted)
            .cloned()
            .ok_or_else(|| HarmonizeError::MissingSheet {
                source_name: name.clone(),
                sheet: wanted.to_string(),
            })?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| HarmonizeError::EmptySource {
                source_name: name.clone(),
            })?,
    };
    debug!(source = %name, sheet = %sheet_name, "reading worksheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{}' of {}", sheet_name, name))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| HarmonizeError::EmptySource {
            source_name: name.clone(),
        })?
        .iter()
        .map(|cell| CellValue::from_data(cell).as_text().unwrap_or_default())
        .collect();

    let grid = rows
        .map(|row| row.iter().map(CellValue::from_data).collect())
        .collect();

    WideTable::from_grid(&name, key_column, headers, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonize::melt;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use tempfile::{tempdir, Builder};

    enum Cell<'a> {
        Text(&'a str),
        Number(f64),
        Blank,
    }

    /// Write one workbook with the given sheets, each a grid of cells
    fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell<'_>>>)]) {
        let mut workbook = Workbook::new();
        for (name, grid) in sheets {
            let sheet = workbook.add_worksheet();
            sheet.set_name(*name).unwrap();
            for (r, row) in grid.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    match cell {
                        Cell::Text(s) => {
                            sheet.write_string(r as u32, c as u16, *s).unwrap();
                        }
                        Cell::Number(n) => {
                            sheet.write_number(r as u32, c as u16, *n).unwrap();
                        }
                        Cell::Blank => {}
                    }
                }
            }
        }
        workbook.save(path).unwrap();
    }

    fn survey_sheet() -> Vec<Vec<Cell<'static>>> {
        use Cell::*;
        vec![
            vec![Text("Countries"), Text("Plastics"), Text("Metals"), Text("Chemicals")],
            vec![Text("Fiji"), Number(40.0), Blank, Number(2.5)],
            vec![Text("Tonga"), Number(12.0), Number(3.0), Number(0.0)],
        ]
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.into())
    }

    #[test]
    fn test_from_grid_splits_key_and_values() {
        let table = WideTable::from_grid(
            "t.csv",
            "Countries",
            vec!["Plastics".into(), "Countries".into(), "".into(), "Metals".into()],
            vec![
                vec![CellValue::Number(3.0), text("Fiji"), CellValue::Empty, CellValue::Number(1.0)],
                vec![CellValue::Empty, CellValue::Empty, CellValue::Empty],
                vec![CellValue::Number(5.0), text("Niue")],
            ],
        )
        .unwrap();

        assert_eq!(table.value_columns, vec!["Plastics", "Metals"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, "Fiji");
        assert_eq!(table.rows[0].cells, vec![CellValue::Number(3.0), CellValue::Number(1.0)]);
        assert_eq!(table.rows[1].cells, vec![CellValue::Number(5.0), CellValue::Empty]);
    }

    #[test]
    fn test_from_grid_requires_key_column() {
        let err = WideTable::from_grid("t.csv", "Row Labels", vec!["Countries".into()], vec![])
            .unwrap_err();
        assert!(err.to_string().contains("Row Labels"));
    }

    #[test]
    fn test_read_wide_csv() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            file,
            "Row Labels,Plastics,Oil splillages and leakages\nTonga,12,\nTuvalu,x,4\n"
        )
        .unwrap();

        let spec = WideSourceConfig::csv_2015();
        let table = read_wide(file.path(), &spec).unwrap();
        assert_eq!(table.key_column, "Row Labels");
        assert_eq!(table.value_columns, vec!["Plastics", "Oil splillages and leakages"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].key, "Tuvalu");
        assert_eq!(table.rows[1].cells[0], text("x"));
    }

    #[test]
    fn test_read_workbook_picks_named_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marine_2018.xlsx");
        let notes = vec![vec![Cell::Text("Countries"), Cell::Text("Note")]];
        write_workbook(&path, &[("Notes", notes), ("Sheet1", survey_sheet())]);

        let table = read_wide(&path, &WideSourceConfig::spreadsheet_2018()).unwrap();
        assert_eq!(table.source_name, "marine_2018.xlsx");
        assert_eq!(table.key_column, "Countries");
        assert_eq!(table.value_columns, vec!["Plastics", "Metals", "Chemicals"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, "Fiji");
        assert_eq!(table.rows[0].cells[0].as_number(), Some(40.0));
        assert!(table.rows[0].cells[1].is_empty());
        assert_eq!(table.rows[0].cells[2].as_number(), Some(2.5));
    }

    #[test]
    fn test_workbook_cells_feed_melt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marine_2018.xlsx");
        write_workbook(&path, &[("Sheet1", survey_sheet())]);

        let table = read_wide(&path, &WideSourceConfig::spreadsheet_2018()).unwrap();
        let melted = melt(&table);
        assert_eq!(melted.len(), 6);

        let values: Vec<_> = melted
            .iter()
            .map(|m| (m.key.as_str(), m.variable.as_str(), m.value.as_number()))
            .collect();
        assert_eq!(values[0], ("Fiji", "Plastics", Some(40.0)));
        assert_eq!(values[1], ("Fiji", "Metals", None));
        assert_eq!(values[2], ("Fiji", "Chemicals", Some(2.5)));
        assert_eq!(values[5], ("Tonga", "Chemicals", Some(0.0)));
    }

    #[test]
    fn test_workbook_without_named_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marine_2018.xlsx");
        write_workbook(&path, &[("Data", survey_sheet())]);

        let err = read_wide(&path, &WideSourceConfig::spreadsheet_2018()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HarmonizeError>(),
            Some(HarmonizeError::MissingSheet { sheet, .. }) if sheet == "Sheet1"
        ));

        let mut first_sheet = WideSourceConfig::spreadsheet_2018();
        first_sheet.sheet = None;
        assert_eq!(read_wide(&path, &first_sheet).unwrap().rows.len(), 2);
    }

    #[test]
    fn test_unreadable_workbook_is_fatal() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        write!(file, "not a workbook").unwrap();
        let spec = WideSourceConfig::spreadsheet_2018();
        assert!(read_wide(file.path(), &spec).is_err());
    }
}
