// src/presentation/http/extractors.rs
use crate::domain::pagination::PageRequest;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// `?page=N&search=term`, parsed without ever rejecting the request.
///
/// A missing, non-numeric or non-positive page becomes 1. A query string that
/// cannot be decoded at all is treated as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub search: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            search: None,
        }
    }
}

impl PageParams {
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|raw| serde_urlencoded::from_str(raw).ok())
            .unwrap_or_default();

        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str())
        };

        Self {
            page: PageRequest::from_param(lookup("page"), 1).page(),
            search: lookup("search").map(ToString::to_string),
        }
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query()))
    }
}
