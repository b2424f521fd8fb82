pub mod health;
pub mod workspaces;
pub mod analysis;
pub mod ai;
pub mod users;
pub mod catalog;
pub mod conversations;

use axum::extract::FromRequest;
use serde_json::Value;
use std::str::FromStr;

use crate::error::{ApiError, ApiResult};

/// JSON body extractor whose rejection renders as an `{"error": ...}` 400
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Parse a `:id` path segment, rejecting anything that is not a non-negative integer.
pub(crate) fn parse_id<T: FromStr>(raw: &str, entity: &str) -> ApiResult<T> {
    raw.parse::<T>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID format", entity)))
}

/// Whether a request field counts as supplied.
///
/// Absent, `null`, `false`, `0` and `""` all count as missing.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
