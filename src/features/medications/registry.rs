//! # Feature: Medication Registry
//!
//! Append-only, in-memory list of medications. Cloning the registry clones the
//! handle, not the list, so the menu and the reminder scheduler see the same
//! entries. Entries live only as long as the process.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with add and exact-name lookup

use super::entry::{MedicationEntry, ValidationError};
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct MedicationRegistry {
    entries: Arc<RwLock<Vec<Arc<MedicationEntry>>>>,
}

impl MedicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a medication.
    ///
    /// Nothing is stored when validation fails. Duplicate names are allowed.
    pub async fn add(
        &self,
        name: &str,
        dosage: &str,
        time_text: &str,
    ) -> Result<Arc<MedicationEntry>, ValidationError> {
        let entry = match MedicationEntry::parse(name, dosage, time_text) {
            Ok(entry) => Arc::new(entry),
            Err(e) => {
                debug!("Rejected medication '{name}': {e}");
                return Err(e);
            }
        };

        let mut entries = self.entries.write().await;
        entries.push(Arc::clone(&entry));
        info!(
            "Registered medication '{}' ({}) at {} [{} total]",
            entry.name,
            entry.dosage,
            entry.time_of_day,
            entries.len()
        );

        Ok(entry)
    }

    /// All entries whose name matches exactly, in insertion order
    pub async fn find_by_name(&self, name: &str) -> Vec<Arc<MedicationEntry>> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.name == name)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
impl MedicationRegistry {
    /// Snapshot of every entry in insertion order
    pub(crate) async fn entries(&self) -> Vec<Arc<MedicationEntry>> {
        self.entries.read().await.clone()
    }

    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub(crate) async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
