// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_POST_AUTHOR: &str = "posts_user_id_fkey";
const CNT_POST_STATUS_CHECK: &str = "posts_status_chk";
const CNT_COMMENT_STATUS_CHECK: &str = "comments_status_chk";
const CNT_POST_SLUG_FORMAT: &str = "posts_slug_format_chk";
const CNT_POST_TITLE_PRESENT: &str = "posts_title_present_chk";
const CNT_CATEGORY_SLUG_FORMAT: &str = "categories_slug_format_chk";
const CNT_CATEGORY_NAME_PRESENT: &str = "categories_name_present_chk";
const CNT_USER_NAME_PRESENT: &str = "users_name_present_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_POST_SLUG => DomainError::Validation("post slug already exists".into()),
        CNT_CATEGORY_SLUG => DomainError::Validation("category slug already exists".into()),
        CNT_USER_EMAIL => DomainError::Validation("email already exists".into()),
        CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
        CNT_POST_STATUS_CHECK => DomainError::Validation("unknown post status".into()),
        CNT_COMMENT_STATUS_CHECK => DomainError::Validation("unknown comment status".into()),
        CNT_POST_SLUG_FORMAT => DomainError::Validation("post slug must be URL-safe".into()),
        CNT_POST_TITLE_PRESENT => DomainError::Validation("title cannot be empty".into()),
        CNT_CATEGORY_SLUG_FORMAT => {
            DomainError::Validation("category slug must be URL-safe".into())
        }
        CNT_CATEGORY_NAME_PRESENT => {
            DomainError::Validation("category name cannot be empty".into())
        }
        CNT_USER_NAME_PRESENT => DomainError::Validation("author name cannot be empty".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}

/// A stored row that fails domain validation is a storage fault, not bad
/// client input.
pub(super) fn corrupt_row(table: &str, id: i64, err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(message) => {
            DomainError::Persistence(format!("invalid {table} row {id}: {message}"))
        }
        other => other,
    }
}
