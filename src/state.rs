use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::store::ProductStore;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared application state
///
/// Owns the product store for the lifetime of the process; handlers reach it
/// only through the guard accessors below, never through ambient globals, so
/// tests can construct isolated instances. The lock makes create's id
/// assignment and update/delete's existence check atomic with their
/// mutation under axum's multi-threaded runtime.
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Product store (shared across requests)
    store: RwLock<ProductStore>,
}

impl AppState {
    /// Create state with the seeded sample catalog
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, ProductStore::with_catalog())
    }

    /// Create state around an explicit store instance
    pub fn with_store(config: ServerConfig, store: ProductStore) -> Self {
        Self {
            config: Arc::new(config),
            store: RwLock::new(store),
        }
    }

    /// Check if the supplied API key matches the configured secret
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        key == self.config.api_key
    }

    /// Read access to the product store
    pub fn products(&self) -> ApiResult<RwLockReadGuard<'_, ProductStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("product store lock poisoned".to_string()))
    }

    /// Write access to the product store
    pub fn products_mut(&self) -> ApiResult<RwLockWriteGuard<'_, ProductStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("product store lock poisoned".to_string()))
    }
}
