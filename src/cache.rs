use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::SystemTime;
use tracing::{debug, info};

use crate::harmonize::Harmonizer;
use crate::model::UnifiedTable;
use crate::ui::SilentUi;

/// Size and modification time of each source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFingerprint {
    entries: Vec<(PathBuf, u64, Option<SystemTime>)>,
}

impl SourceFingerprint {
    pub fn capture(paths: &[PathBuf]) -> Result<Self> {
        let entries = paths
            .iter()
            .map(|path| -> Result<(PathBuf, u64, Option<SystemTime>)> {
                let meta = fs::metadata(path)
                    .with_context(|| format!("Failed to stat source: {:?}", path))?;
                Ok((path.clone(), meta.len(), meta.modified().ok()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }
}

struct CachedTable {
    fingerprint: SourceFingerprint,
    table: Arc<UnifiedTable>,
}

/// Memoizes the unified table.
///
/// The table is built on first use and shared until [`TableCache::invalidate`]
/// is called or a source file changes size or mtime.
pub struct TableCache {
    harmonizer: Harmonizer,
    slot: Mutex<Option<CachedTable>>,
}

impl TableCache {
    pub fn new(harmonizer: Harmonizer) -> Self {
        Self {
            harmonizer,
            slot: Mutex::new(None),
        }
    }

    /// The cached table, rebuilding it if missing or stale
    pub fn get(&self) -> Result<Arc<UnifiedTable>> {
        let fingerprint = SourceFingerprint::capture(&self.harmonizer.source_paths())?;
        let mut slot = self.lock();

        if let Some(cached) = slot.as_ref() {
            if cached.fingerprint == fingerprint {
                debug!("unified table cache hit");
                return Ok(Arc::clone(&cached.table));
            }
            info!("source files changed, rebuilding unified table");
        }

        let table = Arc::new(self.harmonizer.run(&mut SilentUi::new())?);
        *slot = Some(CachedTable {
            fingerprint,
            table: Arc::clone(&table),
        });
        Ok(table)
    }

    /// Drop the cached table; the next `get` rebuilds it
    pub fn invalidate(&self) {
        if self.lock().take().is_some() {
            debug!("unified table cache invalidated");
        }
    }

    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<CachedTable>> {
        // the slot only ever holds a finished table
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
