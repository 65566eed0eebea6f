//! DTOs describing the outcome of a bulk import.

use serde::Deserialize;

/// Counters reported by the import endpoint.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImportStats {
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Body of a successful import response. Only the stats are read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImportResponse {
    pub message: Option<String>,
    pub stats: Option<ImportStats>,
}

impl ImportStats {
    /// Flash text shown after a successful import.
    pub fn summary(&self) -> String {
        format!(
            "Import completed: {} inserted, {} updated, {} skipped.",
            self.inserted, self.updated, self.skipped
        )
    }
}
