use axum::{http::StatusCode, response::IntoResponse};
use repository::RepositoryError;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ClientError(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status_code, message).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| match e {
            RepositoryError::InvalidPagination { .. } => {
                ApiError::ClientError(format!("{message}: {e}"))
            }
            e => {
                error!("{message}: {e:?}");
                ApiError::ServerError(message.to_string())
            }
        })
    }
}

impl<T> IntoApiResponse<T> for Result<T, router::RouterError> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{message}: {e:?}");
            ApiError::ServerError(message.to_string())
        })
    }
}
