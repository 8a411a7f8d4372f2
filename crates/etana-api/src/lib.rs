//! JSON REST API for the Etana Interiors backend.
//!
//! Exposes an axum [`Router`] backed by any
//! [`etana_core::store::ContactStore`]. Transport concerns (TLS, reverse
//! proxying) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", etana_api::api_router(store.clone()))
//! ```

pub mod catalog;
pub mod contacts;
pub mod error;
pub mod health;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch, post},
};
use etana_core::store::ContactStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/health", get(health::handler))
    // Contact form + admin views
    .route("/contact", post(contacts::submit::<S>))
    .route("/contacts", get(contacts::list::<S>))
    .route("/contacts/{id}", get(contacts::get_one::<S>))
    .route("/contacts/{id}/status", patch(contacts::update_status::<S>))
    // Static catalog
    .route("/services", get(catalog::services))
    .route("/company", get(catalog::company))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
