use axum::{extract::State, http::StatusCode};

use crate::ApiState;

/// Unavailable when the post store came up empty.
pub(super) async fn get_health(State(state): State<ApiState>) -> StatusCode {
    if state.repo.post.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}
