use axum::{
    extract::{MatchedPath, State},
    Json,
};
use router::ROUTES;

pub mod response;

use crate::response::ApiResponse;
use crate::{ApiError, ApiState};

use self::response::GetPageResponse;

/// Show an informational page
#[utoipa::path(
    get,
    path = "/{page}",
    responses(
        (status = 200, description = "Found the page", body = GetPageResponse),
        (status = 404, description = "Page is not configured")
    ),
    params(
        ("page" = String, Path, description = "about, contact, pricing or profile"),
    )
)]
pub async fn get_page(
    State(state): State<ApiState>,
    path: MatchedPath,
) -> ApiResponse<Json<GetPageResponse>> {
    let view = ROUTES.resolve(path.as_str()).view;

    let Some(page) = state.config.pages.get(&view) else {
        return Err(ApiError::NotFound(format!("{} has no content", view.name())));
    };

    Ok(Json(GetPageResponse {
        view,
        title: page.title.clone(),
        body: page.body.clone(),
    }))
}
