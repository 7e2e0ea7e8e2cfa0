//! Menu option handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod exit;
pub mod medication;

use std::sync::Arc;

use super::registry::MenuRegistry;

pub use exit::ExitHandler;
pub use medication::{AddMedicationHandler, TrackMedicationHandler};

/// Registry with every menu option, in display order
pub fn default_registry() -> MenuRegistry {
    let mut registry = MenuRegistry::new();
    registry.register(Arc::new(AddMedicationHandler));
    registry.register(Arc::new(TrackMedicationHandler));
    registry.register(Arc::new(ExitHandler));
    registry
}
