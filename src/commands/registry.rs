//! Menu handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::MenuHandler;

/// Registry mapping option keys to handlers, remembering display order
///
/// # Example
///
/// ```ignore
/// let mut registry = MenuRegistry::new();
/// registry.register(Arc::new(AddMedicationHandler));
/// registry.register(Arc::new(ExitHandler));
///
/// if let Some(handler) = registry.get("1") {
///     handler.handle(ctx, &mut console).await?;
/// }
/// ```
#[derive(Clone)]
pub struct MenuRegistry {
    handlers: HashMap<&'static str, Arc<dyn MenuHandler>>,
    order: Vec<&'static str>,
}

impl MenuRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a handler under its option key.
    ///
    /// Re-registering a key replaces the handler but keeps its menu position.
    pub fn register(&mut self, handler: Arc<dyn MenuHandler>) {
        let key = handler.option_key();
        if self.handlers.insert(key, handler).is_none() {
            self.order.push(key);
        }
    }

    /// Get handler for an option key
    pub fn get(&self, key: &str) -> Option<Arc<dyn MenuHandler>> {
        self.handlers.get(key).cloned()
    }

    /// Menu lines as `(key, label)` in registration order
    pub fn options(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.handlers.get(key).map(|h| (*key, h.label())))
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}
