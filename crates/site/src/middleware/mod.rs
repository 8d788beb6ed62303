//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded on the span)
//! 4. Security headers
//! 5. Session layer (tower-sessions with in-memory store)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
