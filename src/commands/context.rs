//! Shared context for menu handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::features::medications::MedicationRegistry;
use crate::features::reminders::SchedulerHandle;

/// Services every menu handler can reach:
/// - MedicationRegistry for adding and looking up medications
/// - SchedulerHandle for registering daily reminders
#[derive(Clone)]
pub struct MenuContext {
    pub registry: MedicationRegistry,
    pub scheduler: SchedulerHandle,
}

impl MenuContext {
    pub fn new(registry: MedicationRegistry, scheduler: SchedulerHandle) -> Self {
        Self {
            registry,
            scheduler,
        }
    }
}
