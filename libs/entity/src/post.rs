use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{comment::Comment, date::PostDate, thumbnail::Thumbnail};

pub type PostId = u32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub date: PostDate,
    pub category: Category,
    pub content: String,
    pub thumbnail: Thumbnail,
    pub likes: u32,
    pub comments: Vec<Comment>,
}

impl Post {
    /// First `max_chars` characters of the content, cut on a char boundary.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => &self.content[..end],
            None => &self.content,
        }
    }
}

/// Free-form label such as `Travel` or `Family`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, label: &str) -> bool {
        self.0.eq_ignore_ascii_case(label.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
