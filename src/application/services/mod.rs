// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, queries::blog::BlogQueryService},
    domain::{
        category::CategoryReadRepository, comment::CommentReadRepository,
        post::PostReadRepository,
    },
};

pub struct ApplicationServices {
    pub blog_queries: Arc<BlogQueryService>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        comment_repo: Arc<dyn CommentReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let blog_queries = Arc::new(BlogQueryService::new(
            Arc::clone(&post_repo),
            Arc::clone(&category_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));

        Self {
            blog_queries,
            clock,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
