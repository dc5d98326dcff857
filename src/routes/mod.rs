//! API route handlers
//!
//! - `products`: CRUD over the product catalog (all under `/api/products`)
//! - the root welcome route and the fallback 404 handler live here

pub mod products;

use crate::error::ApiError;

/// Welcome message
///
/// Root endpoint (GET /), plain text, no authentication and no store
/// dependency.
pub async fn welcome() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}

/// 404 Not Found handler for undefined routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
