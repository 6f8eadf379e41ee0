use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nr_core::DisplayState;
use serde_json::json;
use thiserror::Error;

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Articles are still loading")]
    Loading,

    #[error("{0}")]
    LoadFailed(String),

    #[error("Failed to render page: {0}")]
    Render(#[from] nr_core::Error),
}

impl WebError {
    /// Error for a display state that has no articles to serve.
    pub fn not_ready(display: &DisplayState) -> Self {
        match display {
            DisplayState::Error(message) => Self::LoadFailed(message.clone()),
            _ => Self::Loading,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::Loading | WebError::LoadFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            WebError::Render(e) => {
                tracing::error!("Render error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));
        (status, body).into_response()
    }
}
