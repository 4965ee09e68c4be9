//! JSON error responses for the HTTP API.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::routes::AVAILABLE_ENDPOINTS;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn no_input() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "No input provided",
            message: "Please provide a message in 'user_input' field".into(),
        }
    }
    pub fn empty_response() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Empty response from AI",
            message: "The AI didn't generate a response. Please try again.".into(),
        }
    }
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "Endpoint not found",
            message: "The requested endpoint does not exist".into(),
        }
    }
    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            error: "Method not allowed",
            message: "This endpoint does not support the requested HTTP method".into(),
        }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal server error",
            message: msg.into(),
        }
    }
}

/// Body read failures (oversized, aborted) keep their status but get the JSON envelope.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self {
            status: rejection.status(),
            error: "Invalid request body",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.error,
            "message": self.message,
        });
        if self.status == StatusCode::NOT_FOUND {
            body["available_endpoints"] = json!(AVAILABLE_ENDPOINTS);
        }
        (self.status, Json(body)).into_response()
    }
}
