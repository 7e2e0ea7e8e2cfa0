//! Test fixtures shared by the menu tests

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use tokio::io::{AsyncReadExt, DuplexStream};

use super::console::Console;
use super::context::MenuContext;
use crate::features::medications::MedicationRegistry;
use crate::features::reminders::{Reminder, ReminderNotifier, ReminderScheduler, SystemClock};

struct SilentNotifier;

impl ReminderNotifier for SilentNotifier {
    fn notify(&self, _reminder: &Reminder) {}
}

/// Fresh context plus the scheduler that receives its registrations
pub fn test_context() -> (Arc<MenuContext>, ReminderScheduler) {
    let (scheduler, handle) = ReminderScheduler::new(
        Arc::new(SilentNotifier),
        Arc::new(SystemClock),
        Duration::from_secs(1),
    );
    let ctx = Arc::new(MenuContext::new(MedicationRegistry::new(), handle));
    (ctx, scheduler)
}

/// Read side of a console's output
pub struct CapturedOutput(DuplexStream);

impl CapturedOutput {
    /// Everything written so far. Drop the console first or this waits forever.
    pub async fn collect(mut self) -> String {
        let mut output = String::new();
        self.0
            .read_to_string(&mut output)
            .await
            .expect("console output is valid UTF-8");
        output
    }
}

/// Console that answers prompts from `input` and captures what it prints
pub fn scripted_console(input: &str) -> (Console, CapturedOutput) {
    let (writer, reader) = tokio::io::duplex(64 * 1024);
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), writer);
    (console, CapturedOutput(reader))
}

/// A time no test medication is scheduled at
pub fn early_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|day| day.and_hms_opt(4, 0, 0))
        .expect("valid fixed timestamp")
}
