//! Topic endpoints.
//!
//! - `GET  /api/topics` — list active topics
//! - `POST /api/topics` — create a topic
//! - `PUT  /api/topics/:id` — partial update

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::api::{response, AppState};
use crate::models::request::{CreateTopicRequest, UpdateTopicRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/topics", get(list_topics).post(create_topic))
        .route("/api/topics/:id", axum::routing::put(update_topic))
}

async fn create_topic(
    State(state): State<AppState>,
    Json(req): Json<CreateTopicRequest>,
) -> Response {
    if let Err(msg) = req.validate() {
        return response::bad_request(msg);
    }

    match state.topics.create_topic(req).await {
        Ok(id) => response::created(json!({ "id": id }), "topic created"),
        Err(err) => err.into_response(),
    }
}

async fn list_topics(State(state): State<AppState>) -> Response {
    match state.topics.list_topics().await {
        Ok(topics) => response::ok(topics, ""),
        Err(err) => err.into_response(),
    }
}

async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTopicRequest>,
) -> Response {
    if let Err(msg) = req.validate() {
        return response::bad_request(msg);
    }

    match state.topics.update_topic(id, req).await {
        Ok(()) => response::ok_message("topic updated"),
        Err(err) => err.into_response(),
    }
}
