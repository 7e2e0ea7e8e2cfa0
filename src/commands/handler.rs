//! Menu handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::console::Console;
use super::context::MenuContext;

/// What the menu loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Show the menu again
    Continue,
    /// Leave the menu loop
    Exit,
}

/// Trait for menu option handlers
///
/// Each handler owns one numbered menu option. Handlers are registered with a
/// MenuRegistry and dispatched on the key the user types.
///
/// # Example
///
/// ```ignore
/// pub struct HelpHandler;
///
/// #[async_trait]
/// impl MenuHandler for HelpHandler {
///     fn option_key(&self) -> &'static str {
///         "4"
///     }
///
///     fn label(&self) -> &'static str {
///         "Help"
///     }
///
///     async fn handle(&self, _ctx: Arc<MenuContext>, console: &mut Console) -> Result<MenuOutcome> {
///         console.say("Pick an option by number.").await?;
///         Ok(MenuOutcome::Continue)
///     }
/// }
/// ```
#[async_trait]
pub trait MenuHandler: Send + Sync {
    /// Text the user types to pick this option
    fn option_key(&self) -> &'static str;

    /// Description shown next to the key
    fn label(&self) -> &'static str;

    /// Run the option. Errors are reported by the menu loop, which keeps going.
    async fn handle(&self, ctx: Arc<MenuContext>, console: &mut Console) -> Result<MenuOutcome>;
}
