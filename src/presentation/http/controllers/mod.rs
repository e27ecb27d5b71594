// src/presentation/http/controllers/mod.rs
pub mod blog;
pub mod categories;
pub mod posts;
pub mod system;
