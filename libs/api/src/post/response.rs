use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    #[schema(value_type = String, example = "March 15, 2023")]
    pub date: PostDate,
    #[schema(value_type = String, example = "Travel")]
    pub category: Category,
    #[schema(value_type = Object)]
    pub thumbnail: Thumbnail,
    pub likes: u32,
    pub comment_count: usize,
    pub excerpt: String,
    pub href: String,
}

#[derive(Serialize, ToSchema)]
pub struct GetPostsResponse {
    pub posts: Vec<PostSummary>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Serialize, ToSchema)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    #[schema(value_type = String)]
    pub date: PostDate,
    pub text: String,
}

#[derive(Serialize, ToSchema)]
pub struct PostDetail {
    pub id: PostId,
    pub title: String,
    #[schema(value_type = String)]
    pub date: PostDate,
    #[schema(value_type = String)]
    pub category: Category,
    pub content: String,
    #[schema(value_type = Object)]
    pub thumbnail: Thumbnail,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub href: String,
}

#[derive(Serialize, ToSchema)]
pub struct GetPostResponse {
    pub post: PostDetail,
}
