//! Medication entries and the strict `HH:MM` time-of-day they are scheduled at
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::Timelike;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while validating user input for a new medication
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid time format '{input}'. Please use HH:MM format.")]
    InvalidTimeFormat { input: String },

    #[error("Medication name cannot be empty.")]
    EmptyName,
}

/// Wall-clock hour and minute, parsed from strict 24-hour `HH:MM` text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(TimeOfDay { hour, minute })
    }

    /// True when `time` falls inside this minute (seconds are ignored)
    pub fn matches<T: Timelike>(&self, time: &T) -> bool {
        time.hour() == self.hour && time.minute() == self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTimeFormat {
            input: s.to_string(),
        };

        // Exactly two digits on each side of the colon
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = s[0..2].parse().map_err(|_| invalid())?;
        let minute: u32 = s[3..5].parse().map_err(|_| invalid())?;

        TimeOfDay::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One user-declared medication. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationEntry {
    pub name: String,
    pub dosage: String,
    pub time_of_day: TimeOfDay,
}

impl MedicationEntry {
    /// Validate raw user input and build an entry
    pub fn parse(name: &str, dosage: &str, time_text: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let time_of_day = time_text.parse::<TimeOfDay>()?;

        Ok(MedicationEntry {
            name: name.to_string(),
            dosage: dosage.to_string(),
            time_of_day,
        })
    }

    /// Line shown by the track command
    pub fn schedule_line(&self) -> String {
        format!(
            "{} ({}) is scheduled at {}.",
            self.name, self.dosage, self.time_of_day
        )
    }
}
