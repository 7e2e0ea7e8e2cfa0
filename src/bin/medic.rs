use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use medic::commands::{default_registry, Console, Menu, MenuContext};
use medic::commands::handlers::exit::EXIT_MESSAGE;
use medic::core::Config;
use medic::features::medications::MedicationRegistry;
use medic::features::reminders::{ConsoleNotifier, ReminderScheduler, SystemClock};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Smart Medic Reminder...");

    let registry = MedicationRegistry::new();

    // Start the reminder scheduler; its reminders are printed by the console
    let (notifier, reminders) = ConsoleNotifier::channel();
    let (scheduler, scheduler_handle) = ReminderScheduler::new(
        Arc::new(notifier),
        Arc::new(SystemClock),
        config.poll_interval,
    );
    tokio::spawn(async move {
        scheduler.run().await;
    });

    let ctx = Arc::new(MenuContext::new(registry, scheduler_handle));
    let menu = Menu::new(default_registry(), ctx);
    let mut console = Console::stdio().with_reminders(reminders);

    let code = tokio::select! {
        result = menu.run(&mut console) => match result {
            Ok(()) => 0,
            Err(e) => {
                error!("Console failure: {e:#}");
                eprintln!("An error occurred: {e}");
                1
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("\n{EXIT_MESSAGE}");
            0
        }
    };

    info!("Shutting down (exit code {code})");

    // A pending stdin read would otherwise hold up runtime shutdown
    std::process::exit(code);
}
