//! Types stored in the visitor session.

pub mod session;

pub use session::{keys as session_keys, load_site_session, store_site_session};
