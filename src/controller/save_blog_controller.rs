use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::model::app_state::AppState;
use crate::model::errors::{ApiError, ServerError};
use crate::shared::constants::SAVE_FAILED_MESSAGE;
use crate::shared::save_blog::{save_blog, SaveBlogRequest, SaveBlogResponse};

pub async fn save_blog_file(
    State(state): State<AppState>,
    payload: Result<Json<SaveBlogRequest>, JsonRejection>,
) -> Response {
    let SaveBlogRequest {
        filename,
        file_content,
    } = match payload {
        Ok(Json(request)) => request,
        Err(e) => {
            tracing::error!("Failed to parse save blog request: {}", e.body_text());
            return save_failed().into_response();
        }
    };

    match save_blog(&state.blog_directory, &filename, &file_content).await {
        Ok(path) => {
            let path = path.display().to_string();
            tracing::info!("Saved blog to {}", &path);
            (
                StatusCode::OK,
                Json(SaveBlogResponse {
                    success: true,
                    path,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("File system error: {:#}", e);
            save_failed().into_response()
        }
    }
}

fn save_failed() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ServerError::from(SAVE_FAILED_MESSAGE)),
    )
}
