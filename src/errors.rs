use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::store::{DataLoadError, Dataset};

#[derive(Debug)]
pub enum ApiError {
    DataLoad {
        dataset: Dataset,
        source: DataLoadError,
    },
}

/// Convert our custom errors to HTTP responses
///
/// The underlying cause goes to the log; callers only get the
/// dataset's fixed message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::DataLoad { dataset, source } => {
                error!(%dataset, "Data load failed: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, dataset.error_message())
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
