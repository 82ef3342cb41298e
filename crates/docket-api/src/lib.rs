//! JSON REST API for the Docket precedent catalogue.
//!
//! Exposes an axum [`Router`] backed by any
//! [`docket_core::store::PrecedentStore`]. TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", docket_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod precedents;
pub mod search;
pub mod suggest;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use docket_core::store::PrecedentStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PrecedentStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/search", get(search::handler::<S>))
    .route("/precedent", post(precedents::create::<S>))
    .route("/precedent/{id}", get(precedents::get_one::<S>))
    .route("/suggestions", get(suggest::handler::<S>))
    .with_state(store)
}
