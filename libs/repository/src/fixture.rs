use std::collections::HashSet;

use entity::prelude::*;
use serde::Deserialize;

use crate::{IntoResponse, RepositoryError};

pub(crate) const POSTS: &str = include_str!("fixture/posts.json");

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PostRecord {
    id: PostId,
    title: String,
    date: String,
    category: Category,
    content: String,
    thumbnail: Thumbnail,
    likes: u32,
    #[serde(default)]
    comments: Vec<CommentRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CommentRecord {
    id: CommentId,
    author: String,
    date: String,
    text: String,
}

impl TryFrom<PostRecord> for PostEntity {
    type Error = RepositoryError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        let post_id = value.id;
        let invalid_date =
            |source: DateError| RepositoryError::InvalidDate { post_id, source };

        let mut seen = HashSet::new();
        let mut comments = Vec::with_capacity(value.comments.len());
        for comment in value.comments {
            if !seen.insert(comment.id) {
                return Err(RepositoryError::DuplicateCommentId {
                    post_id,
                    comment_id: comment.id,
                });
            }
            comments.push(CommentEntity {
                id: comment.id,
                author: comment.author,
                date: PostDate::parse(&comment.date).map_err(invalid_date)?,
                text: comment.text,
            });
        }

        Ok(Self {
            id: post_id,
            title: value.title,
            date: PostDate::parse(&value.date).map_err(invalid_date)?,
            category: value.category,
            content: value.content,
            thumbnail: value.thumbnail,
            likes: value.likes,
            comments,
        })
    }
}

pub(crate) fn parse(json: &str) -> Result<Vec<PostEntity>, RepositoryError> {
    let records = serde_json::from_str::<Vec<PostRecord>>(json)
        .into_response("in posts fixture")?;

    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            if record.id == 0 {
                return Err(RepositoryError::InvalidId { position });
            }
            PostEntity::try_from(record)
        })
        .collect()
}
