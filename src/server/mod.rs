//! Collection endpoint (feature-gated): sqlite-backed store plus the axum
//! surface for `GET/POST /api/ads`.

pub mod config;
pub mod http;
mod store;

pub use config::ServerConfig;
pub use http::{BoardHttpState, router};
pub use store::{AdStore, StoreError};
