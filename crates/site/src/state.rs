//! Application state shared across handlers.

use std::sync::Arc;

use rockets_hub_core::{Catalog, ContentError, SiteContent};

use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and gives every request
/// read-only access to configuration and the content registries.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: SiteContent,
}

impl AppState {
    /// Create a new application state with the bundled sample content.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled content fails to load.
    pub fn new(config: SiteConfig) -> Result<Self, ContentError> {
        let content = SiteContent::sample()?;
        Ok(Self::with_content(config, content))
    }

    /// Create application state around already-loaded content.
    #[must_use]
    pub fn with_content(config: SiteConfig, content: SiteContent) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, content }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the content registries.
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.inner.content
    }

    /// Shortcut for the store catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.content.catalog
    }
}
