//! Settings operations.
//!
//! Wraps the settings store port and supplies the compiled-in default for
//! the single world-scoped setting: the sheet background image.

use std::sync::Arc;

use crate::infrastructure::ports::{SettingsStore, StoreError};

/// Default background image path when nothing has been persisted.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "icons/parchment.jpg";

/// Settings operations over the injected store.
pub struct Settings {
    store: Arc<dyn SettingsStore>,
}

impl Settings {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// The background image path, falling back to the default.
    pub async fn background_image(&self) -> Result<String, SettingsError> {
        Ok(self
            .store
            .background_image()
            .await?
            .unwrap_or_else(|| DEFAULT_BACKGROUND_IMAGE.to_string()))
    }

    /// Persist a new background image path (host file-picker affordance).
    pub async fn set_background_image(&self, path: &str) -> Result<(), SettingsError> {
        self.store.set_background_image(path).await?;
        Ok(())
    }
}

/// Errors that can occur during settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
