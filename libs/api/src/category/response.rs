use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct Category {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct GetCategoriesResponse {
    pub categories: Vec<Category>,
}
