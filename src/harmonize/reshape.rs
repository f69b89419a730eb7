use crate::parser::CellValue;
use crate::source::WideTable;

/// One (key, variable, value) triple produced by [`melt`]
#[derive(Debug, Clone, PartialEq)]
pub struct MeltedCell {
    pub key: String,
    pub variable: String,
    pub value: CellValue,
}

/// Unpivot a wide table into one row per (key row, value column), row-major.
pub fn melt(table: &WideTable) -> Vec<MeltedCell> {
    let mut out = Vec::with_capacity(table.rows.len() * table.value_columns.len());
    for row in &table.rows {
        for (variable, value) in table.value_columns.iter().zip(&row.cells) {
            out.push(MeltedCell {
                key: row.key.clone(),
                variable: variable.clone(),
                value: value.clone(),
            });
        }
    }
    out
}

/// Indicator code for a wide-file column header: `prefix` + upper-cased
/// header with spaces replaced by underscores.
pub fn indicator_code_for_column(prefix: &str, header: &str) -> String {
    format!("{}{}", prefix, header.trim().to_uppercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::WideRow;

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    #[test]
    fn test_melt_two_by_two() {
        let table = WideTable {
            source_name: "t".into(),
            key_column: "Countries".into(),
            value_columns: vec!["X".into(), "Y".into()],
            rows: vec![
                WideRow { key: "A".into(), cells: vec![num(1.0), num(2.0)] },
                WideRow { key: "B".into(), cells: vec![num(3.0), num(4.0)] },
            ],
        };

        let melted: Vec<_> = melt(&table)
            .into_iter()
            .map(|c| (c.key, c.variable, c.value.as_number().unwrap()))
            .collect();

        assert_eq!(
            melted,
            vec![
                ("A".to_string(), "X".to_string(), 1.0),
                ("A".to_string(), "Y".to_string(), 2.0),
                ("B".to_string(), "X".to_string(), 3.0),
                ("B".to_string(), "Y".to_string(), 4.0),
            ]
        );
    }

    #[test]
    fn test_melt_keeps_empty_cells() {
        let table = WideTable {
            source_name: "t".into(),
            key_column: "Countries".into(),
            value_columns: vec!["X".into()],
            rows: vec![WideRow { key: "A".into(), cells: vec![CellValue::Empty] }],
        };
        let melted = melt(&table);
        assert_eq!(melted.len(), 1);
        assert!(melted[0].value.is_empty());
    }

    #[test]
    fn test_indicator_code_for_column() {
        assert_eq!(
            indicator_code_for_column("MARINE_POLLUTION_", "Oil splillages and leakages"),
            "MARINE_POLLUTION_OIL_SPLILLAGES_AND_LEAKAGES"
        );
        assert_eq!(
            indicator_code_for_column("MARINE_POLLUTION_", " Plastics "),
            "MARINE_POLLUTION_PLASTICS"
        );
        assert_eq!(
            indicator_code_for_column("MARINE_POLLUTION_", "Land based source"),
            "MARINE_POLLUTION_LAND_BASED_SOURCE"
        );
    }
}
