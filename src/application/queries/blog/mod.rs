mod category;
mod home;
mod listing;
mod post;
mod service;

pub use category::CategoryPostsQuery;
pub use listing::BlogListingQuery;
pub use post::PostBySlugQuery;
pub use service::{
    BLOG_PATH, BlogQueryService, HOME_LATEST_POSTS, POSTS_PER_PAGE, RELATED_POSTS,
};
