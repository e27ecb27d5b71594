pub mod categories;
pub mod comments;
pub mod pages;
pub mod pagination;
pub mod posts;
pub mod serde_time;

pub use categories::{CategoryDto, CategoryWithCountDto};
pub use comments::CommentDto;
pub use pages::{BlogListingPage, CategoryPage, HomePage, PostPage};
pub use pagination::{PageUrl, Paginated, PaginationLink};
pub use posts::{AuthorDto, PostDetailDto, PostSummaryDto};
