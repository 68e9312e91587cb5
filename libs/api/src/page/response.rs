use router::View;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetPageResponse {
    #[schema(value_type = String, example = "About")]
    pub view: View,
    pub title: String,
    pub body: String,
}
