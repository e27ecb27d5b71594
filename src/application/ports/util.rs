// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, hyphen-separated, URL-safe rendition of `input`.
    fn slugify(&self, input: &str) -> String;
}
