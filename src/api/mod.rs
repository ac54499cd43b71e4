//! HTTP transport layer: application state, routes, and middleware stack.

pub mod news_routes;
pub mod response;
pub mod topic_routes;
pub mod user_routes;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::repository::{
    ArticleRepository, ArticleTopicRepository, TopicRepository, UserRepository,
};
use crate::service::{ArticleService, TopicService, UserService};

/// Shared application state: the service layer, wired over one pool.
#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
    pub topics: TopicService,
    pub users: UserService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            articles: ArticleService::new(
                ArticleRepository::new(pool.clone()),
                ArticleTopicRepository::new(pool.clone()),
            ),
            topics: TopicService::new(TopicRepository::new(pool.clone())),
            users: UserService::new(UserRepository::new(pool)),
        }
    }
}

/// Build the router with the full middleware stack.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(news_routes::router())
        .merge(topic_routes::router())
        .merge(user_routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

async fn health_check() -> axum::response::Response {
    response::ok_message("OK")
}
