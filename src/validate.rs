//! Payload validation for create and update requests
//!
//! Validation runs over the raw JSON value rather than a typed struct so a
//! wrong-typed field is reported as a violation instead of failing
//! deserialization, and so every rule is evaluated — a payload with several
//! problems reports them all together.

use serde_json::Value;

/// Validate a candidate product payload, returning all violations
///
/// An empty list means the payload is valid and can be deserialized into a
/// [`crate::model::ProductDraft`] without error. Rules are independent and
/// never short-circuit:
///
/// - `name`: required string, trimmed length >= 3
/// - `price`: required number, strictly positive
/// - `description`: required string, trimmed length >= 10
/// - `inStock`: required boolean
///
/// `category` is free-form and `id` is server-assigned, so neither is
/// checked here.
pub fn validate_product(payload: &Value) -> Vec<String> {
    let mut violations = Vec::new();

    match payload.get("name").and_then(Value::as_str) {
        Some(name) if name.trim().chars().count() >= 3 => {}
        _ => violations
            .push("Name is required and must be at least 3 characters long".to_string()),
    }

    match payload.get("price").and_then(Value::as_f64) {
        Some(price) if price > 0.0 => {}
        _ => violations.push("Price is required and must be a positive number".to_string()),
    }

    match payload.get("description").and_then(Value::as_str) {
        Some(description) if description.trim().chars().count() >= 10 => {}
        _ => violations
            .push("Description is required and must be at least 10 characters long".to_string()),
    }

    if payload.get("inStock").and_then(Value::as_bool).is_none() {
        violations.push("inStock is required and must be boolean".to_string());
    }

    violations
}
