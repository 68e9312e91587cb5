use serde::Serialize;

use crate::date::PostDate;

pub type CommentId = u32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub date: PostDate,
    pub text: String,
}
