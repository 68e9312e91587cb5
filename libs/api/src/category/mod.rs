use axum::{extract::State, Json};

pub mod response;

use crate::ApiState;

use self::response::{Category, GetCategoriesResponse};

/// List categories with their post counts
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List categories successfully", body = GetCategoriesResponse)
    )
)]
pub async fn get_categories(
    State(state): State<ApiState>,
) -> Json<GetCategoriesResponse> {
    let categories = state
        .repo
        .post
        .categories()
        .into_iter()
        .map(|entry| Category {
            name: entry.category.to_string(),
            count: entry.count,
        })
        .collect();

    Json(GetCategoriesResponse { categories })
}
