// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for visibility checks. Injected so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
