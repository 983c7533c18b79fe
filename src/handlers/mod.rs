//! HTTP handlers for the content operations and the landing page read.

pub mod content;
pub mod landing;
pub use content::*;
pub use landing::*;

use crate::error::AppError;
use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Typed input from a request body. Unparsable JSON, a missing content type and
/// shape errors all become `400 bad_request`.
pub(crate) fn parse_body<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = body?;
    parse_value(value)
}

fn parse_value<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))
}

pub(crate) fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UpdateCommunityStats;

    #[test]
    fn parse_value_requires_object() {
        let err = parse_value::<UpdateCommunityStats>(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn parse_value_rejects_wrong_types() {
        let err = parse_value::<UpdateCommunityStats>(serde_json::json!({ "github_stars": "many" })).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn parse_id_values() {
        assert_eq!(parse_id("17").unwrap(), 17);
        assert!(parse_id("abc").is_err());
    }
}
