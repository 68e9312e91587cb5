use axum::{
    extract::{Path, Query, State},
    Json,
};
use entity::prelude::*;
use repository::PostQuery;
use router::{View, ROUTES};
use tracing::debug;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::GetPostsParam;
use self::response::{
    Comment, GetPostResponse, GetPostsResponse, PostDetail, PostSummary,
};

pub const EXCERPT_CHARS: usize = 120;

fn post_href(id: PostId) -> ApiResponse<String> {
    let id = id.to_string();
    ROUTES
        .href(View::PostDetail, &[("id", id.as_str())])
        .into_response("failed to build post link")
}

/// List posts
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "List posts successfully", body = GetPostsResponse),
        (status = 400, description = "Invalid pagination")
    ),
    params(
        GetPostsParam
    )
)]
pub async fn get_posts(
    State(state): State<ApiState>,
    Query(params): Query<GetPostsParam>,
) -> ApiResponse<Json<GetPostsResponse>> {
    let query = PostQuery {
        category: params
            .category
            .filter(|category| !category.trim().is_empty()),
        sort: params.sort.unwrap_or_default(),
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(state.config.page_size),
    };
    debug!(task = "list posts", sort = %query.sort, page = query.page);

    let page = state
        .repo
        .post
        .find_paginate(&query)
        .into_response("failed to list posts")?;

    let posts = page
        .posts
        .into_iter()
        .map(|post| -> ApiResponse<PostSummary> {
            Ok(PostSummary {
                id: post.id,
                title: post.title.clone(),
                date: post.date.clone(),
                category: post.category.clone(),
                thumbnail: post.thumbnail.clone(),
                likes: post.likes,
                comment_count: post.comments.len(),
                excerpt: post.excerpt(EXCERPT_CHARS).to_string(),
                href: post_href(post.id)?,
            })
        })
        .collect::<ApiResponse<Vec<_>>>()?;

    Ok(Json(GetPostsResponse {
        posts,
        total: page.total,
        page: page.page,
        limit: page.limit,
    }))
}

/// Show a post with its comments
#[utoipa::path(
    get,
    path = "/post/{id}",
    responses(
        (status = 200, description = "Found the post", body = GetPostResponse),
        (status = 400, description = "Id is not a post id"),
        (status = 404, description = "No post with this id")
    ),
    params(
        ("id" = u32, Path, description = "post id"),
    )
)]
pub async fn get_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResponse<Json<GetPostResponse>> {
    // one spelling per post: "+3" and "03" are not "3"
    let id = id
        .parse::<PostId>()
        .ok()
        .filter(|parsed| parsed.to_string() == id)
        .ok_or_else(|| {
            ApiError::ClientError(format!("'{id}' is not a post id"))
        })?;

    let Some(post) = state.repo.post.find_by_id(id) else {
        return Err(ApiError::NotFound(format!("post {id} does not exist")));
    };

    Ok(Json(GetPostResponse {
        post: PostDetail {
            id: post.id,
            title: post.title.clone(),
            date: post.date.clone(),
            category: post.category.clone(),
            content: post.content.clone(),
            thumbnail: post.thumbnail.clone(),
            likes: post.likes,
            comments: post
                .comments
                .iter()
                .map(|comment| Comment {
                    id: comment.id,
                    author: comment.author.clone(),
                    date: comment.date.clone(),
                    text: comment.text.clone(),
                })
                .collect(),
            href: post_href(post.id)?,
        },
    }))
}
