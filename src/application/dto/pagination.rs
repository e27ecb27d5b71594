// src/application/dto/pagination.rs
//! Length-aware pagination payload.
//!
//! The shape (`current_page`, `data`, `links`, ...) is what the front-end
//! pagination component consumes, including the sliding window of numbered
//! links with `...` gaps.

use crate::domain::pagination::PageSlice;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pages shown on each side of the current page in a long link window.
const ON_EACH_SIDE: u32 = 3;

pub const PREVIOUS_LABEL: &str = "&laquo; Previous";
pub const NEXT_LABEL: &str = "Next &raquo;";
pub const GAP_LABEL: &str = "...";

/// Builds page URLs for one listing, keeping extra query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    path: String,
    query: Vec<(String, String)>,
}

impl PageUrl {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn for_page(&self, page: u32) -> String {
        let mut pairs: Vec<(&str, String)> = self
            .query
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        pairs.push(("page", page.to_string()));

        match serde_urlencoded::to_string(&pairs) {
            Ok(query) => format!("{}?{query}", self.path),
            Err(_) => format!("{}?page={page}", self.path),
        }
    }
}

/// One page-navigation control.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PaginationLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub first_page_url: String,
    /// 1-based position of the first item on this page.
    pub from: Option<u64>,
    pub last_page: u32,
    pub last_page_url: String,
    pub links: Vec<PaginationLink>,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn from_slice<U>(slice: PageSlice<U>, url: &PageUrl) -> Self
    where
        U: Into<T>,
    {
        let current_page = slice.request.page();
        let per_page = slice.request.per_page();
        let last_page = slice.last_page();
        let total = slice.total;
        let offset = slice.request.offset();

        let data: Vec<T> = slice.items.into_iter().map(Into::into).collect();
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (Some(offset + 1), Some(offset + data.len() as u64))
        };

        let prev_page_url = (current_page > 1).then(|| url.for_page(current_page - 1));
        let next_page_url = (current_page < last_page).then(|| url.for_page(current_page + 1));

        let links = link_window(
            url,
            current_page,
            last_page,
            prev_page_url.clone(),
            next_page_url.clone(),
        );

        Self {
            current_page,
            data,
            first_page_url: url.for_page(1),
            from,
            last_page,
            last_page_url: url.for_page(last_page),
            links,
            next_page_url,
            path: url.path().to_string(),
            per_page,
            prev_page_url,
            to,
            total,
        }
    }
}

fn link_window(
    url: &PageUrl,
    current_page: u32,
    last_page: u32,
    prev_page_url: Option<String>,
    next_page_url: Option<String>,
) -> Vec<PaginationLink> {
    let mut links = vec![PaginationLink {
        url: prev_page_url,
        label: PREVIOUS_LABEL.to_string(),
        active: false,
    }];

    for segment in window_segments(current_page, last_page) {
        match segment {
            Segment::Pages(first, last) => links.extend((first..=last).map(|page| PaginationLink {
                url: Some(url.for_page(page)),
                label: page.to_string(),
                active: page == current_page,
            })),
            Segment::Gap => links.push(PaginationLink {
                url: None,
                label: GAP_LABEL.to_string(),
                active: false,
            }),
        }
    }

    links.push(PaginationLink {
        url: next_page_url,
        label: NEXT_LABEL.to_string(),
        active: false,
    });
    links
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Pages(u32, u32),
    Gap,
}

fn window_segments(current_page: u32, last_page: u32) -> Vec<Segment> {
    use Segment::{Gap, Pages};

    let window = ON_EACH_SIDE + 4;

    if last_page < ON_EACH_SIDE * 2 + 8 {
        return vec![Pages(1, last_page)];
    }

    let finish = Pages(last_page - 1, last_page);

    if current_page <= window {
        vec![Pages(1, window + ON_EACH_SIDE), Gap, finish]
    } else if current_page > last_page - window {
        vec![
            Pages(1, 2),
            Gap,
            Pages(last_page - (window + ON_EACH_SIDE - 1), last_page),
        ]
    } else {
        vec![
            Pages(1, 2),
            Gap,
            Pages(current_page - ON_EACH_SIDE, current_page + ON_EACH_SIDE),
            Gap,
            finish,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::PageRequest;

    fn labels(links: &[PaginationLink]) -> Vec<&str> {
        links.iter().map(|link| link.label.as_str()).collect()
    }

    fn page_of(total: u64, page: u32) -> Paginated<u64> {
        let request = PageRequest::new(page, 12);
        let start = request.offset();
        let end = (start + 12).min(total);
        let items: Vec<u64> = (start..end.max(start)).collect();
        Paginated::from_slice(PageSlice::new(items, total, request), &PageUrl::new("/blog"))
    }

    #[test]
    fn page_url_keeps_extra_query_before_page() {
        let url = PageUrl::new("/blog").with_query("search", "rust & go");
        assert_eq!(url.for_page(2), "/blog?search=rust+%26+go&page=2");
        assert_eq!(PageUrl::new("/categories/php").for_page(1), "/categories/php?page=1");
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let page = page_of(0, 1);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
        assert!(page.prev_page_url.is_none());
        assert!(page.next_page_url.is_none());
        assert_eq!(labels(&page.links), vec![PREVIOUS_LABEL, "1", NEXT_LABEL]);
        assert!(page.links[1].active);
    }

    #[test]
    fn middle_page_reports_positions_and_neighbours() {
        let page = page_of(30, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.from, Some(13));
        assert_eq!(page.to, Some(24));
        assert_eq!(page.prev_page_url.as_deref(), Some("/blog?page=1"));
        assert_eq!(page.next_page_url.as_deref(), Some("/blog?page=3"));
        assert_eq!(page.first_page_url, "/blog?page=1");
        assert_eq!(page.last_page_url, "/blog?page=3");
        assert_eq!(page.path, "/blog");
        assert_eq!(page.per_page, 12);
        assert_eq!(page.total, 30);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let page = page_of(30, 9);
        assert!(page.data.is_empty());
        assert_eq!(page.from, None);
        assert_eq!(page.last_page, 3);
        assert!(page.next_page_url.is_none());
        assert_eq!(page.prev_page_url.as_deref(), Some("/blog?page=8"));
        assert!(page.links.iter().all(|link| !link.active));
    }

    #[test]
    fn short_listings_show_every_page() {
        let page = page_of(12 * 13, 5);
        let labels = labels(&page.links);
        assert_eq!(labels.len(), 13 + 2);
        assert!(!labels.contains(&GAP_LABEL));
        let active: Vec<_> = page.links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "5");
    }

    #[test]
    fn window_near_the_start() {
        assert_eq!(
            window_segments(3, 20),
            vec![Segment::Pages(1, 10), Segment::Gap, Segment::Pages(19, 20)]
        );
        assert_eq!(
            window_segments(7, 20),
            vec![Segment::Pages(1, 10), Segment::Gap, Segment::Pages(19, 20)]
        );
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(
            window_segments(14, 20),
            vec![Segment::Pages(1, 2), Segment::Gap, Segment::Pages(11, 20)]
        );
        assert_eq!(
            window_segments(40, 20),
            vec![Segment::Pages(1, 2), Segment::Gap, Segment::Pages(11, 20)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            window_segments(10, 20),
            vec![
                Segment::Pages(1, 2),
                Segment::Gap,
                Segment::Pages(7, 13),
                Segment::Gap,
                Segment::Pages(19, 20),
            ]
        );
    }

    #[test]
    fn gap_links_have_no_url() {
        let page = page_of(12 * 20, 10);
        let gaps: Vec<_> = page.links.iter().filter(|l| l.label == GAP_LABEL).collect();
        assert_eq!(gaps.len(), 2);
        assert!(gaps.iter().all(|gap| gap.url.is_none() && !gap.active));
    }
}
