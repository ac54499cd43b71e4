//! Response envelope and domain-error rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::error::DomainError;

/// Uniform JSON envelope: `{ "data": ..., "message": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: Some(data),
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn ok_message(message: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse::<()> {
            data: None,
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn created<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    (
        StatusCode::CREATED,
        Json(ApiResponse {
            data: Some(data),
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()> {
            data: None,
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Semantically a success: nothing to change.
            DomainError::NoFieldUpdate => return ok_message("no field updated"),
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::DuplicateKey { .. } => StatusCode::CONFLICT,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (
            status,
            Json(ApiResponse::<()> {
                data: None,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
