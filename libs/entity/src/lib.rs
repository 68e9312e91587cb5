pub mod comment;
pub mod date;
pub mod post;
pub mod thumbnail;

pub mod prelude {
    pub use crate::comment::Comment as CommentEntity;
    pub use crate::comment::CommentId;
    pub use crate::date::{DateError, PostDate};
    pub use crate::post::{Category, Post as PostEntity, PostId};
    pub use crate::thumbnail::Thumbnail;
}
