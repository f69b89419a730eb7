//! Canonical observation schema and the tables written on export

use super::types::*;

/// The six canonical columns, followed by any extra columns given
macro_rules! canonical_columns {
    ($($extra:expr),* $(,)?) => {
        &[
            Column::required("indicator_code", ColumnType::Text).header("INDICATOR"),
            Column::new("country_code", ColumnType::Text).header("GEO_PICT"),
            Column::new("time_period", ColumnType::Integer),
            Column::new("obs_value", ColumnType::Real),
            Column::new("unit_measure", ColumnType::Text),
            Column::new("data_source", ColumnType::Text),
            $($extra),*
        ]
    };
}

/// The six canonical columns every harmonized batch conforms to, in order.
pub static OBSERVATION_COLUMNS: &[Column] = canonical_columns!();

/// Canonical file headers, in column order
pub fn canonical_headers() -> Vec<String> {
    OBSERVATION_COLUMNS.iter().map(Column::header_name).collect()
}

// =============================================================================
// Export Tables
// =============================================================================

pub static OBSERVATIONS: TableSchema = TableSchema {
    name: "observations",
    columns: canonical_columns![
        Column::required("indicator_label", ColumnType::Text),
        Column::new("country_name", ColumnType::Text).header("Country"),
    ],
    indexes: &[
        Index::on(&["indicator_code"]),
        Index::on(&["indicator_label"]),
        Index::on(&["country_code", "time_period"]),
    ],
};

pub static INDICATORS: TableSchema = TableSchema {
    name: "indicators",
    columns: &[
        Column::required("code", ColumnType::Text),
        Column::required("label", ColumnType::Text),
        Column::required("description", ColumnType::Text),
    ],
    indexes: &[Index::unique(&["code"])],
};

pub static COUNTRIES: TableSchema = TableSchema {
    name: "countries",
    columns: &[
        Column::required("code", ColumnType::Text),
        Column::required("name", ColumnType::Text),
        Column::new("latitude", ColumnType::Real),
        Column::new("longitude", ColumnType::Real),
    ],
    indexes: &[Index::unique(&["code"])],
};

/// All exported tables, in creation order
pub static ALL_TABLES: &[&TableSchema] = &[&OBSERVATIONS, &INDICATORS, &COUNTRIES];
