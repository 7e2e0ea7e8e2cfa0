//! # Features
//!
//! - `medications`: entries and the shared registry
//! - `reminders`: the clock-polling reminder scheduler

pub mod medications;
pub mod reminders;

pub use medications::{MedicationEntry, MedicationRegistry, TimeOfDay, ValidationError};
pub use reminders::{
    Clock, ConsoleNotifier, Reminder, ReminderNotifier, ReminderScheduler, SchedulerHandle,
    SystemClock,
};
