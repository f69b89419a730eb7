use std::collections::BTreeSet;
use tracing::warn;

use crate::config::LookupPolicy;
use crate::error::HarmonizeError;

/// Applies a [`LookupPolicy`] to static-table lookups and remembers every key
/// that missed.
#[derive(Debug)]
pub struct MissLog {
    table: &'static str,
    policy: LookupPolicy,
    misses: BTreeSet<String>,
}

impl MissLog {
    pub fn new(table: &'static str, policy: LookupPolicy) -> Self {
        Self {
            table,
            policy,
            misses: BTreeSet::new(),
        }
    }

    /// Resolve `key` given the result of the table lookup. On a miss the raw
    /// key is returned unless the policy is strict.
    pub fn resolve(
        &mut self,
        key: &str,
        hit: Option<&str>,
        strict_error: impl FnOnce(String) -> HarmonizeError,
    ) -> Result<String, HarmonizeError> {
        if let Some(value) = hit {
            return Ok(value.to_string());
        }

        match self.policy {
            LookupPolicy::Strict => Err(strict_error(key.to_string())),
            LookupPolicy::Warn => {
                if self.misses.insert(key.to_string()) {
                    warn!(table = self.table, key, "no lookup entry, keeping raw value");
                }
                Ok(key.to_string())
            }
            LookupPolicy::Passthrough => {
                self.misses.insert(key.to_string());
                Ok(key.to_string())
            }
        }
    }

    /// Distinct keys that missed, sorted
    pub fn misses(&self) -> Vec<&str> {
        self.misses.iter().map(String::as_str).collect()
    }
}
