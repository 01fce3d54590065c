//! # Kasir API
//!
//! HTTP/JSON product catalog for a point-of-sale backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Kasir API Server                              │
//! │                                                                         │
//! │  HTTP (8080) ──► routes ──► handlers ──► ProductService ──► repository │
//! │                                                               │         │
//! │                                              ┌────────────────┴──────┐  │
//! │                                              ▼                       ▼  │
//! │                                         PostgreSQL            in-memory │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`] for the environment keys.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod service;

// Re-exports
pub use app::{bootstrap, App, BootError, StorageMode};
pub use config::AppConfig;
pub use error::ApiError;
pub use service::ProductService;
