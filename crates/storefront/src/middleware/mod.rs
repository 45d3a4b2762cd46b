//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. Session layer (tower-sessions with `SQLite` store)
//! 3. `TraceLayer` (request span)
//! 4. Request ID (record in span, echo in response)
//! 5. Security headers (CSP, frame denial, etc.)
//!
//! Handlers then load their [`crate::store::Store`] through the extractors
//! in [`auth`].

pub mod auth;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{CurrentStore, RequestStore, RequireAdmin, RequireUser};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
