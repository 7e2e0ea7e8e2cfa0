//! Medication menu handlers
//!
//! Handles: add medication, track medication
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::commands::console::Console;
use crate::commands::context::MenuContext;
use crate::commands::handler::{MenuHandler, MenuOutcome};

/// Handler for adding a medication and scheduling its daily reminder
pub struct AddMedicationHandler;

#[async_trait]
impl MenuHandler for AddMedicationHandler {
    fn option_key(&self) -> &'static str {
        "1"
    }

    fn label(&self) -> &'static str {
        "Add medication"
    }

    async fn handle(&self, ctx: Arc<MenuContext>, console: &mut Console) -> Result<MenuOutcome> {
        let Some(name) = console.prompt("Enter medication name: ").await? else {
            return Ok(MenuOutcome::Exit);
        };
        let Some(dosage) = console.prompt("Enter dosage: ").await? else {
            return Ok(MenuOutcome::Exit);
        };
        let Some(time_text) = console
            .prompt("Enter time to take medication (HH:MM): ")
            .await?
        else {
            return Ok(MenuOutcome::Exit);
        };

        let entry = match ctx.registry.add(&name, &dosage, &time_text).await {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Add medication rejected: {e}");
                console.say(&e.to_string()).await?;
                return Ok(MenuOutcome::Continue);
            }
        };

        ctx.scheduler
            .schedule(Arc::clone(&entry))
            .with_context(|| {
                format!(
                    "'{}' was added but no reminder is scheduled for it",
                    entry.name
                )
            })?;
        info!("Scheduled daily reminder for '{name}' at {time_text}");

        console
            .say(&format!(
                "Added medication: {} at {}.",
                entry.name, entry.time_of_day
            ))
            .await?;

        Ok(MenuOutcome::Continue)
    }
}

/// Handler for looking up when a medication is scheduled
pub struct TrackMedicationHandler;

#[async_trait]
impl MenuHandler for TrackMedicationHandler {
    fn option_key(&self) -> &'static str {
        "2"
    }

    fn label(&self) -> &'static str {
        "Track medication"
    }

    async fn handle(&self, ctx: Arc<MenuContext>, console: &mut Console) -> Result<MenuOutcome> {
        let Some(name) = console.prompt("Enter medication name to track: ").await? else {
            return Ok(MenuOutcome::Exit);
        };

        let matches = ctx.registry.find_by_name(&name).await;
        debug!("Track '{name}': {} match(es)", matches.len());

        if matches.is_empty() {
            console.say("Medication not found.").await?;
        } else {
            for entry in &matches {
                console.say(&entry.schedule_line()).await?;
            }
        }

        Ok(MenuOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{early_morning, scripted_console, test_context};

    #[test]
    fn test_option_keys() {
        assert_eq!(AddMedicationHandler.option_key(), "1");
        assert_eq!(AddMedicationHandler.label(), "Add medication");
        assert_eq!(TrackMedicationHandler.option_key(), "2");
        assert_eq!(TrackMedicationHandler.label(), "Track medication");
    }

    #[tokio::test]
    async fn test_add_registers_and_schedules() {
        let (ctx, mut scheduler) = test_context();
        let (mut console, output) = scripted_console("Aspirin\n100mg\n08:00\n");

        let outcome = AddMedicationHandler
            .handle(ctx.clone(), &mut console)
            .await
            .unwrap();
        drop(console);

        assert_eq!(outcome, MenuOutcome::Continue);
        assert_eq!(ctx.registry.len().await, 1);
        assert!(output
            .collect()
            .await
            .ends_with("Added medication: Aspirin at 08:00.\n"));

        scheduler.tick(early_morning());
        assert_eq!(scheduler.trigger_count(), 1);
    }

    #[tokio::test]
    async fn test_add_invalid_time_reports_and_skips_schedule() {
        let (ctx, mut scheduler) = test_context();
        let (mut console, output) = scripted_console("Ibuprofen\n50mg\n9:99\n");

        let outcome = AddMedicationHandler
            .handle(ctx.clone(), &mut console)
            .await
            .unwrap();
        drop(console);

        assert_eq!(outcome, MenuOutcome::Continue);
        assert!(ctx.registry.is_empty().await);
        assert!(output
            .collect()
            .await
            .ends_with("Invalid time format '9:99'. Please use HH:MM format.\n"));

        scheduler.tick(early_morning());
        assert_eq!(scheduler.trigger_count(), 0);
    }

    #[tokio::test]
    async fn test_add_stops_on_end_of_input() {
        let (ctx, _scheduler) = test_context();
        let (mut console, _output) = scripted_console("Aspirin\n");

        let outcome = AddMedicationHandler.handle(ctx.clone(), &mut console).await.unwrap();

        assert_eq!(outcome, MenuOutcome::Exit);
        assert!(ctx.registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_fails_when_scheduler_is_gone() {
        let (ctx, scheduler) = test_context();
        drop(scheduler);
        let (mut console, output) = scripted_console("Aspirin\n100mg\n08:00\n");

        let err = AddMedicationHandler
            .handle(ctx.clone(), &mut console)
            .await
            .unwrap_err();
        drop(console);

        assert_eq!(
            err.to_string(),
            "'Aspirin' was added but no reminder is scheduled for it"
        );
        assert!(!output.collect().await.contains("Added medication"));
        // the entry itself was still recorded
        assert_eq!(ctx.registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_name_is_kept_as_typed() {
        let (ctx, _scheduler) = test_context();
        let (mut console, _output) = scripted_console("Aspirin \n100mg\n08:00\n");

        AddMedicationHandler.handle(ctx.clone(), &mut console).await.unwrap();

        assert_eq!(ctx.registry.find_by_name("Aspirin ").await.len(), 1);
        assert!(ctx.registry.find_by_name("Aspirin").await.is_empty());
    }

    #[tokio::test]
    async fn test_track_lists_every_match() {
        let (ctx, _scheduler) = test_context();
        ctx.registry.add("Metformin", "500mg", "08:00").await.unwrap();
        ctx.registry.add("Aspirin", "100mg", "09:00").await.unwrap();
        ctx.registry.add("Metformin", "500mg", "20:00").await.unwrap();
        let (mut console, output) = scripted_console("Metformin\n");

        TrackMedicationHandler.handle(ctx, &mut console).await.unwrap();
        drop(console);

        assert_eq!(
            output.collect().await,
            "Enter medication name to track: \
             Metformin (500mg) is scheduled at 08:00.\n\
             Metformin (500mg) is scheduled at 20:00.\n"
        );
    }

    #[tokio::test]
    async fn test_track_not_found() {
        let (ctx, _scheduler) = test_context();
        let (mut console, output) = scripted_console("Paracetamol\n");

        TrackMedicationHandler.handle(ctx, &mut console).await.unwrap();
        drop(console);

        assert!(output.collect().await.ends_with("Medication not found.\n"));
    }
}
