use repository::SortOrder;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPostsParam {
    /// Case-insensitive category label
    pub category: Option<String>,
    /// fixture, newest, oldest or most_liked
    #[param(value_type = Option<String>)]
    pub sort: Option<SortOrder>,
    /// 1-based page number
    pub page: Option<usize>,
    pub limit: Option<usize>,
}
