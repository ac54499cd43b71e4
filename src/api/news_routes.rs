//! News article endpoints.
//!
//! - `GET    /api/news` — list active articles (filters: `status`, `topic_id`)
//! - `POST   /api/news` — create an article, optionally with topics
//! - `GET    /api/news/:slug` — public read view
//! - `PUT    /api/news/:slug` — partial update
//! - `DELETE /api/news/:slug` — soft delete

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::api::{response, AppState};
use crate::models::request::{ArticleFilter, CreateArticleRequest, UpdateArticleRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/news", get(list_news).post(create_news))
        .route(
            "/api/news/:slug",
            get(get_news).put(update_news).delete(delete_news),
        )
}

async fn create_news(
    State(state): State<AppState>,
    Json(req): Json<CreateArticleRequest>,
) -> Response {
    if let Err(msg) = req.validate() {
        return response::bad_request(msg);
    }

    match state.articles.create_article(req).await {
        Ok(id) => response::created(json!({ "id": id }), "news created"),
        Err(err) => err.into_response(),
    }
}

async fn list_news(
    State(state): State<AppState>,
    Query(filter): Query<ArticleFilter>,
) -> Response {
    match state.articles.list_articles(filter).await {
        Ok(articles) => response::ok(articles, ""),
        Err(err) => err.into_response(),
    }
}

async fn get_news(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.articles.get_article_by_slug(&slug).await {
        Ok(article) => response::ok(article, ""),
        Err(err) => err.into_response(),
    }
}

async fn update_news(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<UpdateArticleRequest>,
) -> Response {
    if let Err(msg) = req.validate() {
        return response::bad_request(msg);
    }

    match state.articles.update_article_by_slug(&slug, req).await {
        Ok(()) => response::ok_message("news updated"),
        Err(err) => err.into_response(),
    }
}

async fn delete_news(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.articles.delete_article_by_slug(&slug).await {
        Ok(()) => response::ok_message("news deleted"),
        Err(err) => err.into_response(),
    }
}
