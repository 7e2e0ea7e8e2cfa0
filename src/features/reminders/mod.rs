//! # Reminders Feature
//!
//! Daily medication reminders printed to the console.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod clock;
pub mod notifier;
pub mod scheduler;

pub use clock::{Clock, SystemClock};
pub use notifier::{ConsoleNotifier, Reminder, ReminderNotifier};
pub use scheduler::{ReminderScheduler, SchedulerHandle};
