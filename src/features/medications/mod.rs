//! # Medications Feature
//!
//! Medication entries and the shared registry they live in.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod entry;
pub mod registry;

pub use entry::{MedicationEntry, TimeOfDay, ValidationError};
pub use registry::MedicationRegistry;
