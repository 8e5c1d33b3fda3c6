use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::ErrorMessage;

/// The fallback for requests that do not match any route.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorMessage {
            message: "Not found".to_owned(),
        }),
    )
        .into_response()
}
