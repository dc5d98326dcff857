//! Product API - HTTP REST server for an in-memory product catalog
//!
//! This crate provides an HTTP server exposing CRUD operations over a
//! catalog of products held in process memory. It supports:
//!
//! - **Catalog Management**: List, fetch, create, update, and delete products
//! - **Validation**: Field-level payload validation with aggregated violations
//! - **Middleware**: Request logging, API key authentication, panic recovery
//! - **Configuration**: Environment variable and file-based configuration
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use product_api::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     product_api::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - Welcome message
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `GET /api/products` - List all products
//! - `GET /api/products/{id}` - Get product by id
//! - `POST /api/products` - Create a product
//! - `PUT /api/products/{id}` - Update a product
//! - `DELETE /api/products/{id}` - Delete a product
//!
//! All `/api/*` routes require an `x-api-key` header matching the configured
//! secret.

pub mod config;
pub mod error;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod validate;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use model::{Product, ProductDraft};
pub use server::{build_router, start_server};
pub use state::AppState;
pub use store::ProductStore;
