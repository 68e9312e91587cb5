use entity::prelude::*;
use post::PostRepository;
use tracing::info;

mod fixture;
pub mod post;

pub use post::{CategoryCount, PostPage, PostQuery, SortOrder};

#[derive(Clone, Debug)]
pub struct Repository {
    pub post: PostRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("in serde_json crate from malformed fixture: {}: {}", message, source)]
    Fixture {
        message: String,
        source: serde_json::Error,
    },

    #[error("post ids must be positive, found 0 at position {position}")]
    InvalidId { position: usize },

    #[error("post id {id} appears more than once")]
    DuplicatePostId { id: PostId },

    #[error("comment id {comment_id} appears more than once in post {post_id}")]
    DuplicateCommentId {
        post_id: PostId,
        comment_id: CommentId,
    },

    #[error("invalid date in post {post_id}: {source}")]
    InvalidDate { post_id: PostId, source: DateError },

    #[error("page and limit must both be at least 1 (page {page}, limit {limit})")]
    InvalidPagination { page: usize, limit: usize },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, serde_json::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::Fixture {
            message: message.to_string(),
            source: e,
        })
    }
}

impl Repository {
    /// Store backed by the fixture compiled into the binary.
    pub fn from_fixture() -> Response<Self> {
        Self::from_json(fixture::POSTS)
    }

    pub fn from_json(json: &str) -> Response<Self> {
        let posts = fixture::parse(json)?;

        info!(task = "load posts", posts = posts.len());

        Ok(Self {
            post: PostRepository::new(posts)?,
        })
    }
}
