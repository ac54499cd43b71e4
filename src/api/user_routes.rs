//! User endpoints.
//!
//! - `POST /api/users` — create a user (foreign-key target for articles)

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use crate::api::{response, AppState};
use crate::models::request::CreateUserRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", post(create_user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    if let Err(msg) = req.validate() {
        return response::bad_request(msg);
    }

    match state.users.create_user(req).await {
        Ok(id) => response::created(json!({ "id": id }), "user created"),
        Err(err) => err.into_response(),
    }
}
