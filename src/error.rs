//! API error responses
//!
//! Every handler error renders as a JSON body of the shape
//! `{"message": "..."}` with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found")]
    ProductNotFound,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ProductNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = ApiError::ProductNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::ProductNotFound.to_string(), "Product not found");
    }
}
