//! # Interactive Menu
//!
//! Foreground loop: show the options, read a choice, dispatch to the handler.
//! Handler errors are reported and the loop continues.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::Result;
use log::{debug, error, info};
use std::sync::Arc;

use super::console::Console;
use super::context::MenuContext;
use super::handler::MenuOutcome;
use super::handlers::exit::EXIT_MESSAGE;
use super::registry::MenuRegistry;

pub const WELCOME_MESSAGE: &str = "Welcome to Smart Medic Reminder";
pub const INVALID_OPTION_MESSAGE: &str = "Invalid option, please choose a valid option.";

pub struct Menu {
    registry: MenuRegistry,
    ctx: Arc<MenuContext>,
}

impl Menu {
    pub fn new(registry: MenuRegistry, ctx: Arc<MenuContext>) -> Self {
        Menu { registry, ctx }
    }

    /// Run until the user exits or input ends
    pub async fn run(&self, console: &mut Console) -> Result<()> {
        console.say(WELCOME_MESSAGE).await?;

        loop {
            console.say("").await?;
            console.say("Options:").await?;
            for (key, label) in self.registry.options() {
                console.say(&format!("{key}. {label}")).await?;
            }

            let Some(choice) = console.prompt("Choose an option: ").await? else {
                debug!("Console input closed");
                console.say("").await?;
                console.say(EXIT_MESSAGE).await?;
                return Ok(());
            };

            let choice = choice.trim();
            let Some(handler) = self.registry.get(choice) else {
                console.say(INVALID_OPTION_MESSAGE).await?;
                continue;
            };

            match handler.handle(Arc::clone(&self.ctx), console).await {
                Ok(MenuOutcome::Continue) => {}
                Ok(MenuOutcome::Exit) => {
                    info!("Menu exited via option '{choice}'");
                    return Ok(());
                }
                Err(e) => {
                    error!("Menu option '{choice}' failed: {e:#}");
                    console.say(&format!("An error occurred: {e}")).await?;
                }
            }
        }
    }
}
