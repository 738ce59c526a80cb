//! JSON error envelopes.

/// Single-error shape used for missing resources: `{"error": "..."}`.
pub fn error_body(error: String) -> serde_json::Value {
    serde_json::json!({ "error": error })
}

/// Multi-error shape used for rejected input: `{"errors": [...]}`.
pub fn errors_body(errors: Vec<String>) -> serde_json::Value {
    serde_json::json!({ "errors": errors })
}
