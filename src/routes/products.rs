use crate::error::{ApiError, ApiResult};
use crate::model::ProductDraft;
use crate::state::AppState;
use crate::validate::validate_product;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

/// Parse a path parameter into a product id
///
/// Ids are numeric; an unparsable path id cannot address any record, so it
/// behaves as not-found rather than a bad request.
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// Unwrap the JSON body extractor
///
/// A malformed body is an unexpected fault, not a validation failure: it is
/// recorded server-side and surfaces as the generic 500 response.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    let Json(payload) =
        payload.map_err(|err| ApiError::Internal(format!("malformed request body: {err}")))?;
    Ok(payload)
}

/// List all products
///
/// GET /api/products - returns the full catalog in insertion order.
pub async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let store = state.products()?;
    Ok(Json(store.list().to_vec()))
}

/// Get a single product by id
///
/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let store = state.products()?;
    let product = store.get(id).ok_or(ApiError::NotFound)?;
    Ok(Json(product.clone()))
}

/// Create a product
///
/// POST /api/products - validates the payload, then inserts with a
/// server-assigned id. On violations nothing is stored and all messages are
/// returned together.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let payload = json_body(payload)?;

    let violations = validate_product(&payload);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    // Validation guarantees the draft deserializes.
    let draft: ProductDraft = serde_json::from_value(payload)?;
    let product = state.products_mut()?.create(draft);

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
///
/// PUT /api/products/{id} - an absent id is 404 regardless of the body;
/// otherwise the payload is validated and the mutable fields replaced in
/// place. The existence check and the mutation happen under one write guard.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let payload = json_body(payload)?;

    let mut store = state.products_mut()?;
    if store.get(id).is_none() {
        return Err(ApiError::NotFound);
    }

    let violations = validate_product(&payload);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let draft: ProductDraft = serde_json::from_value(payload)?;
    let product = store.update(id, draft).ok_or(ApiError::NotFound)?;

    Ok(Json(product))
}

/// Delete a product
///
/// DELETE /api/products/{id} - 204 with an empty body on success; a second
/// delete of the same id is 404.
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    if !state.products_mut()?.delete(id) {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
