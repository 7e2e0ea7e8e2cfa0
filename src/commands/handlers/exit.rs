//! Exit menu handler

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::commands::console::Console;
use crate::commands::context::MenuContext;
use crate::commands::handler::{MenuHandler, MenuOutcome};

pub const EXIT_MESSAGE: &str = "Exiting the application.";

/// Handler for leaving the application
pub struct ExitHandler;

#[async_trait]
impl MenuHandler for ExitHandler {
    fn option_key(&self) -> &'static str {
        "3"
    }

    fn label(&self) -> &'static str {
        "Exit"
    }

    async fn handle(&self, _ctx: Arc<MenuContext>, console: &mut Console) -> Result<MenuOutcome> {
        console.say(EXIT_MESSAGE).await?;
        Ok(MenuOutcome::Exit)
    }
}
