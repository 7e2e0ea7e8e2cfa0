//! Reminder delivery
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::features::medications::MedicationEntry;
use chrono::NaiveDateTime;
use log::warn;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A reminder that came due for one medication
#[derive(Debug, Clone)]
pub struct Reminder {
    pub entry: Arc<MedicationEntry>,
    pub fired_at: NaiveDateTime,
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reminder: Time to take your medication - {} ({}).",
            self.entry.name, self.entry.dosage
        )
    }
}

/// Receives reminders from the scheduler
pub trait ReminderNotifier: Send + Sync {
    fn notify(&self, reminder: &Reminder);
}

/// Hands reminders to the interactive console.
///
/// The console prints them between prompts so a reminder never splits a
/// line the menu is writing.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    tx: UnboundedSender<Reminder>,
}

impl ConsoleNotifier {
    /// Notifier plus the receiver to attach with `Console::with_reminders`
    pub fn channel() -> (Self, UnboundedReceiver<Reminder>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ConsoleNotifier { tx }, rx)
    }
}

impl ReminderNotifier for ConsoleNotifier {
    fn notify(&self, reminder: &Reminder) {
        if self.tx.send(reminder.clone()).is_err() {
            warn!(
                "Console is gone; reminder for '{}' was not shown",
                reminder.entry.name
            );
        }
    }
}
