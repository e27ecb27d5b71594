// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod blog_repos;
pub mod failing;
pub mod time;

// 時刻関連
pub use time::{fixed_clock, fixed_now};

// ブログ読み取りリポジトリ
pub use blog_repos::InMemoryBlog;

// 障害注入
pub use failing::FailingPostRepo;
