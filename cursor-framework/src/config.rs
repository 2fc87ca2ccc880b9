use crate::class::ClassRegistry;
use common_framework::DEFAULT_CAPACITY;
use std::sync::Arc;

/// Settings for a [`Cursor`](crate::Cursor).
#[derive(Debug, Clone)]
pub struct CursorConfig {
    /// How many undo points the cursor remembers.
    pub history_capacity: usize,
    /// Classes used by name lookups such as `is(&["digit"])`.
    pub registry: Arc<ClassRegistry>,
}

impl CursorConfig {
    pub fn new() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            registry: ClassRegistry::standard(),
        }
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn registry(mut self, registry: impl Into<Arc<ClassRegistry>>) -> Self {
        self.registry = registry.into();
        self
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self::new()
    }
}
