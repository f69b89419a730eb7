use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::model::UnifiedTable;

/// Write the unified table as a pretty-printed JSON array of rows
pub fn export_to_json(table: &UnifiedTable, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table.rows())
        .with_context(|| format!("Failed to write JSON to {:?}", path))?;
    writer.flush()?;
    info!(path = %path.display(), rows = table.len(), "exported JSON");
    Ok(())
}
