use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use entity::prelude::*;
use serde::Deserialize;

use crate::{RepositoryError, Response};

pub const DEFAULT_LIMIT: usize = 20;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Fixture,
    Newest,
    Oldest,
    MostLiked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostQuery {
    pub category: Option<String>,
    pub sort: SortOrder,
    /// 1-based
    pub page: usize,
    pub limit: usize,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            category: None,
            sort: SortOrder::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug)]
pub struct PostPage<'a> {
    pub posts: Vec<&'a PostEntity>,
    /// Matching posts before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug)]
struct Posts {
    posts: Vec<PostEntity>,
    index: HashMap<PostId, usize>,
}

/// Read-only view over the post list. Clones share the same data.
#[derive(Clone, Debug)]
pub struct PostRepository {
    inner: Arc<Posts>,
}

impl PostRepository {
    pub fn new(posts: Vec<PostEntity>) -> Response<Self> {
        let mut index = HashMap::with_capacity(posts.len());
        for (position, post) in posts.iter().enumerate() {
            if index.insert(post.id, position).is_some() {
                return Err(RepositoryError::DuplicatePostId { id: post.id });
            }
        }

        Ok(Self {
            inner: Arc::new(Posts { posts, index }),
        })
    }
}

impl PostRepository {
    pub fn find_all(&self) -> &[PostEntity] {
        &self.inner.posts
    }

    pub fn find_by_id(&self, id: PostId) -> Option<&PostEntity> {
        self.inner
            .index
            .get(&id)
            .map(|&position| &self.inner.posts[position])
    }

    pub fn find_comments(&self, id: PostId) -> Option<&[CommentEntity]> {
        self.find_by_id(id).map(|post| post.comments.as_slice())
    }

    pub fn find_paginate(&self, query: &PostQuery) -> Response<PostPage<'_>> {
        if query.page == 0 || query.limit == 0 {
            return Err(RepositoryError::InvalidPagination {
                page: query.page,
                limit: query.limit,
            });
        }

        let mut posts: Vec<&PostEntity> = self
            .inner
            .posts
            .iter()
            .filter(|post| match &query.category {
                Some(label) => post.category.matches(label),
                None => true,
            })
            .collect();

        // stable sorts, ties stay in fixture order
        match query.sort {
            SortOrder::Fixture => {}
            SortOrder::Newest => {
                posts.sort_by_key(|post| Reverse(post.date.naive()))
            }
            SortOrder::Oldest => posts.sort_by_key(|post| post.date.naive()),
            SortOrder::MostLiked => posts.sort_by_key(|post| Reverse(post.likes)),
        }

        let total = posts.len();
        let posts = posts
            .into_iter()
            .skip((query.page - 1).saturating_mul(query.limit))
            .take(query.limit)
            .collect();

        Ok(PostPage {
            posts,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    /// Distinct categories in order of first appearance, grouped the way
    /// `find_paginate` filters them.
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = vec![];
        for post in &self.inner.posts {
            let label = post.category.as_str();
            match counts.iter_mut().find(|c| c.category.matches(label)) {
                Some(entry) => entry.count += 1,
                None => counts.push(CategoryCount {
                    category: post.category.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.inner.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.posts.is_empty()
    }
}
