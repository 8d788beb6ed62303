//! Session-related types.
//!
//! The whole [`SiteSession`] is stored under a single key. Handlers load it,
//! apply one operation, and store it back before rendering.

use rockets_hub_core::SiteSession;
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart, page, overlay, and search state.
    pub const SITE_SESSION: &str = "site_session";
}

/// Load the visitor's site session, starting a fresh one if none exists.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value cannot be
/// deserialized.
pub async fn load_site_session(
    session: &Session,
) -> Result<SiteSession, tower_sessions::session::Error> {
    Ok(session
        .get::<SiteSession>(keys::SITE_SESSION)
        .await?
        .unwrap_or_default())
}

/// Store the visitor's site session.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn store_site_session(
    session: &Session,
    site: &SiteSession,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::SITE_SESSION, site).await
}
