//! Application state for the dataset engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::DefaultsLoader;

/// Shared application state.
///
/// Generation calls are stateless apart from the explicitly passed pattern
/// cache, so the state only carries the defaults profile served to form
/// clients.
#[derive(Clone)]
pub struct AppState {
    /// The loaded defaults profile.
    defaults: Arc<DefaultsLoader>,
}

impl AppState {
    /// Creates a new application state with the given defaults loader.
    pub fn new(defaults: DefaultsLoader) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }

    /// Returns a reference to the defaults loader.
    pub fn defaults(&self) -> &DefaultsLoader {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
