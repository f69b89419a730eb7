use anyhow::{Context, Result};
use rusqlite::Connection;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

use super::schema_gen::{generate_create_table, generate_indexes};
use crate::model::{EnrichedObservation, UnifiedTable};
use crate::schema::{
    describe, indicator_label, TableSchema, ALL_TABLES, COUNTRIES, COUNTRY_TABLE, INDICATORS,
    INDICATOR_LABELS, OBSERVATIONS,
};
use crate::ui::{Phase, Ui};

const BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Null => stmt.raw_bind_parameter(idx, rusqlite::types::Null)?,
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Real(f) => stmt.raw_bind_parameter(idx, f)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(v: Option<i32>) -> Self {
        v.map(|i| SqlValue::Integer(i as i64)).unwrap_or(SqlValue::Null)
    }
}

impl From<Option<f64>> for SqlValue {
    fn from(v: Option<f64>) -> Self {
        v.map(SqlValue::Real).unwrap_or(SqlValue::Null)
    }
}

/// Values for one `observations` row, in schema column order
fn observation_values(row: &EnrichedObservation) -> Vec<SqlValue> {
    let obs = &row.observation;
    vec![
        obs.indicator_code.as_str().into(),
        obs.country_code.as_str().into(),
        obs.time_period.into(),
        obs.obs_value.into(),
        obs.unit_measure.as_str().into(),
        obs.data_source.as_str().into(),
        row.indicator_label.as_str().into(),
        row.country_name.as_str().into(),
    ]
}

pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    pub fn new(db_path: &Path) -> Result<Self> {
        // Remove existing database if present
        if db_path.exists() {
            std::fs::remove_file(db_path).context("Failed to remove existing database")?;
        }

        let conn = Connection::open(db_path).context("Failed to create database")?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        Ok(Self { conn })
    }

    /// Create all tables for the given schemas
    pub fn create_tables(&self, schemas: &[&TableSchema]) -> Result<()> {
        for schema in schemas {
            let sql = generate_create_table(schema);
            self.conn
                .execute(&sql, [])
                .with_context(|| format!("Failed to create table: {}", schema.name))?;

            for index_sql in generate_indexes(schema) {
                self.conn
                    .execute(&index_sql, [])
                    .with_context(|| format!("Failed to create index for: {}", schema.name))?;
            }
        }

        Ok(())
    }

    /// Insert rows into a table in batched transactions
    pub fn insert_rows(
        &mut self,
        schema: &TableSchema,
        rows: impl IntoIterator<Item = Vec<SqlValue>>,
        ui: &mut impl Ui,
        total: u64,
    ) -> Result<u64> {
        let columns = schema.column_names();
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
        let insert_sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            schema.name,
            columns.join(", "),
            placeholders.join(", ")
        );

        let tx = self.conn.transaction()?;
        let mut count: u64 = 0;
        let mut batch: Vec<Vec<SqlValue>> = Vec::with_capacity(BATCH_SIZE);

        for row in rows {
            batch.push(row);

            if batch.len() >= BATCH_SIZE {
                insert_batch(&tx, &insert_sql, &batch)
                    .with_context(|| format!("Failed to insert into {}", schema.name))?;
                count += batch.len() as u64;
                ui.set_progress(count, total, schema.name);
                batch.clear();
            }
        }

        // Insert remaining batch
        if !batch.is_empty() {
            insert_batch(&tx, &insert_sql, &batch)
                .with_context(|| format!("Failed to insert into {}", schema.name))?;
            count += batch.len() as u64;
        }

        tx.commit()?;
        ui.set_progress(count, total, schema.name);
        ui.log(format!("{}: {} records", schema.name, count));

        Ok(count)
    }

    pub fn finalize(self) -> Result<()> {
        self.conn.execute_batch("PRAGMA optimize;")?;
        Ok(())
    }
}

/// Insert a batch of rows using a cached prepared statement
fn insert_batch(tx: &rusqlite::Transaction, sql: &str, batch: &[Vec<SqlValue>]) -> Result<()> {
    let mut stmt = tx.prepare_cached(sql)?;

    for row in batch {
        for (idx, value) in row.iter().enumerate() {
            value.bind_to(idx + 1, &mut stmt)?;
        }
        stmt.raw_execute()?;
    }

    Ok(())
}

/// Write the unified table and the static lookups to a fresh SQLite database.
/// Returns the number of observation rows written.
pub fn export_to_sqlite(table: &UnifiedTable, db_path: &Path, ui: &mut impl Ui) -> Result<u64> {
    ui.set_phase(Phase::Exporting);
    let mut writer = SqliteWriter::new(db_path)?;
    writer.create_tables(ALL_TABLES)?;

    let written = writer.insert_rows(
        &OBSERVATIONS,
        table.iter().map(observation_values),
        ui,
        table.len() as u64,
    )?;

    let codes: BTreeSet<&str> = table
        .iter()
        .map(|r| r.indicator_code())
        .chain(INDICATOR_LABELS.iter().map(|(code, _)| *code))
        .collect();
    let indicator_rows: Vec<Vec<SqlValue>> = codes
        .iter()
        .map(|&code| -> Vec<SqlValue> {
            vec![
                code.into(),
                indicator_label(code).unwrap_or(code).into(),
                describe(code).into(),
            ]
        })
        .collect();
    let total = indicator_rows.len() as u64;
    writer.insert_rows(&INDICATORS, indicator_rows, ui, total)?;

    let country_rows = COUNTRY_TABLE.iter().map(|c| -> Vec<SqlValue> {
        vec![
            c.code.into(),
            c.name.into(),
            Some(c.latitude).into(),
            Some(c.longitude).into(),
        ]
    });
    writer.insert_rows(&COUNTRIES, country_rows, ui, COUNTRY_TABLE.len() as u64)?;

    writer.finalize()?;
    info!(path = %db_path.display(), rows = written, "exported SQLite database");
    ui.set_phase(Phase::Complete);

    Ok(written)
}
