//! # Command System
//!
//! Numbered console menu driving the medication registry and reminders.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Menu loop with handler trait, context and registry

pub mod console;
pub mod context;
pub mod handler;
pub mod handlers;
pub mod menu;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

// Re-export handler infrastructure
pub use console::Console;
pub use context::MenuContext;
pub use handler::{MenuHandler, MenuOutcome};
pub use handlers::default_registry;
pub use menu::Menu;
pub use registry::MenuRegistry;
