pub mod json;
pub mod schema_gen;
pub mod sqlite;

pub use json::export_to_json;
pub use sqlite::{export_to_sqlite, SqlValue, SqliteWriter};
