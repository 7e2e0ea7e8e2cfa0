// Core layer - configuration
pub mod core;

// Features layer - medications and reminders
pub mod features;

// Application layer - interactive menu
pub mod commands;

pub use crate::core::Config;

pub use features::{
    // Medications
    MedicationEntry, MedicationRegistry, TimeOfDay, ValidationError,
    // Reminders
    Clock, ConsoleNotifier, Reminder, ReminderNotifier, ReminderScheduler, SchedulerHandle,
    SystemClock,
};

pub use commands::{default_registry, Console, Menu, MenuContext};
