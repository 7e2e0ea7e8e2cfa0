//! # Feature: Reminder Scheduler
//!
//! Polls the wall clock and fires one reminder per medication per day at the
//! medication's scheduled minute. New medications reach the scheduler over a
//! channel; each one becomes exactly one daily trigger.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with per-minute matching and per-day dedup

use super::clock::Clock;
use super::notifier::{Reminder, ReminderNotifier};
use crate::features::medications::MedicationEntry;
use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// A medication handed to the scheduler, stamped with when it was handed over
type Registration = (Arc<MedicationEntry>, NaiveDateTime);

/// Sending side used by the menu to register newly added medications
#[derive(Clone)]
pub struct SchedulerHandle {
    tx: mpsc::UnboundedSender<Registration>,
    clock: Arc<dyn Clock>,
}

impl SchedulerHandle {
    /// Register a daily trigger for `entry`, dated by the scheduler's clock now
    pub fn schedule(&self, entry: Arc<MedicationEntry>) -> Result<()> {
        let registered_at = self.clock.now();
        self.tx.send((entry, registered_at)).map_err(|e| {
            anyhow!(
                "Reminder scheduler is not running; '{}' was not scheduled",
                (e.0).0.name
            )
        })
    }
}

/// A medication's time-of-day plus the last date it fired on
#[derive(Debug)]
struct DailyTrigger {
    entry: Arc<MedicationEntry>,
    last_fired: Option<NaiveDate>,
}

impl DailyTrigger {
    /// A trigger observed during its own minute has already missed today's slot
    fn new(entry: Arc<MedicationEntry>, registered_at: NaiveDateTime) -> Self {
        let last_fired = entry
            .time_of_day
            .matches(&registered_at)
            .then(|| registered_at.date());
        DailyTrigger { entry, last_fired }
    }

    fn is_due(&self, now: NaiveDateTime) -> bool {
        self.entry.time_of_day.matches(&now) && self.last_fired != Some(now.date())
    }
}

pub struct ReminderScheduler {
    triggers: Vec<DailyTrigger>,
    inbox: mpsc::UnboundedReceiver<Registration>,
    notifier: Arc<dyn ReminderNotifier>,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
}

impl ReminderScheduler {
    pub fn new(
        notifier: Arc<dyn ReminderNotifier>,
        clock: Arc<dyn Clock>,
        poll_interval: Duration,
    ) -> (Self, SchedulerHandle) {
        let (tx, inbox) = mpsc::unbounded_channel();
        let scheduler = ReminderScheduler {
            triggers: Vec::new(),
            inbox,
            notifier,
            clock: Arc::clone(&clock),
            poll_interval,
        };
        (scheduler, SchedulerHandle { tx, clock })
    }

    /// Register pending entries, then fire every trigger due at `now`.
    ///
    /// Each pending entry is dated by its registration time, not by `now`.
    ///
    /// Returns how many reminders were fired.
    pub fn tick(&mut self, now: NaiveDateTime) -> usize {
        while let Ok((entry, registered_at)) = self.inbox.try_recv() {
            debug!(
                "Scheduling daily reminder for '{}' at {} (registered {})",
                entry.name, entry.time_of_day, registered_at
            );
            self.triggers.push(DailyTrigger::new(entry, registered_at));
        }

        let mut fired = 0;
        for trigger in self.triggers.iter_mut().filter(|t| t.is_due(now)) {
            trigger.last_fired = Some(now.date());

            let reminder = Reminder {
                entry: Arc::clone(&trigger.entry),
                fired_at: now,
            };
            info!(
                "Firing reminder for '{}' ({}) scheduled at {} [{}]",
                reminder.entry.name,
                reminder.entry.dosage,
                reminder.entry.time_of_day,
                reminder.fired_at
            );
            self.notifier.notify(&reminder);
            fired += 1;
        }

        fired
    }

    /// Poll the clock forever. Runs until the process exits.
    pub async fn run(mut self) {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Reminder scheduler started (interval: {}ms)",
            self.poll_interval.as_millis()
        );

        loop {
            interval.tick().await;
            let now = self.clock.now();
            self.tick(now);
        }
    }
}

#[cfg(test)]
impl ReminderScheduler {
    /// Number of triggers registered so far
    pub(crate) fn trigger_count(&self) -> usize {
        self.triggers.len()
    }
}
