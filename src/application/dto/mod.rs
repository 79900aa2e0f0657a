// src/application/dto/mod.rs
pub mod articles;
pub mod comments;
pub mod pagination;
pub mod profiles;
pub mod users;

pub use articles::{ArticleDto, ArticleView, TagsDto};
pub use comments::{CommentDto, CommentView};
pub use pagination::PageRequest;
pub use profiles::ProfileView;
pub use users::UserDto;
