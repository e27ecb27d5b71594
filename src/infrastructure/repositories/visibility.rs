// src/infrastructure/repositories/visibility.rs
//! SQL rendering of [`PublicVisibility`]. Every query that surfaces posts
//! goes through [`push_public_visibility`]; nothing else spells out the
//! status/timestamp condition.

use crate::domain::post::PublicVisibility;
use sqlx::{Postgres, QueryBuilder};

/// Appends `<alias>.status = 'published' AND <alias>.published_at IS NOT NULL
/// AND <alias>.published_at <= now` with both values bound.
pub(super) fn push_public_visibility(
    builder: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    visibility: PublicVisibility,
) {
    builder
        .push(alias)
        .push(".status = ")
        .push_bind(visibility.required_status().as_str())
        .push(" AND ")
        .push(alias)
        .push(".published_at IS NOT NULL AND ")
        .push(alias)
        .push(".published_at <= ")
        .push_bind(visibility.now());
}

/// `ILIKE` pattern matching `term` anywhere, with wildcards in the term escaped.
pub(super) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
