use axum::routing::post;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::model::app_state::AppState;

pub mod save_blog_controller;

pub fn build_router(state: AppState) -> Router {
    let blogs = ServeDir::new(state.blog_directory.as_path());

    Router::new()
        .route(
            "/api/save-blog",
            post(save_blog_controller::save_blog_file),
        )
        .nest_service("/blogs", blogs)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
