//! Persistence gateway for student records.
//!
//! Handlers only see [`StudentStore`]. `PgStudentStore` is the production
//! backend; `MemoryStudentStore` keeps the same semantics in process.

pub mod memory;
pub mod pg;

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;

use crate::models::student::{NewStudent, Student};

pub use memory::MemoryStudentStore;
pub use pg::PgStudentStore;

/// Hard cap on rows returned by the list page.
pub const LIST_LIMIT: i64 = 500;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connection pool: {0}")]
    Pool(String),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Newest first, at most `limit` rows. `search` is a literal,
    /// case-insensitive substring matched against name, roll or class.
    async fn list(&self, search: Option<&str>, limit: i64) -> Result<Vec<Student>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Student>, StoreError>;

    async fn create(&self, new_student: NewStudent) -> Result<Student, StoreError>;

    /// Returns `None` when no record has this id.
    async fn update(&self, id: i64, changes: NewStudent) -> Result<Option<Student>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Release backend resources after shutdown.
    async fn close(&self) {}
}

static LIKE_META: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\\%_]").unwrap());

/// Build an `ILIKE` pattern that matches `query` literally anywhere in a column.
pub fn like_pattern(query: &str) -> String {
    format!("%{}%", LIKE_META.replace_all(query, r"\$0"))
}

/// Trimmed search text, or `None` when there is nothing to filter on.
pub fn normalize_search(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|q| !q.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("a.b"), "%a.b%");
        assert_eq!(like_pattern("50%"), r"%50\%%");
        assert_eq!(like_pattern("r_1"), r"%r\_1%");
        assert_eq!(like_pattern(r"c:\x"), r"%c:\\x%");
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some("  R-1 ")), Some("R-1"));
    }
}
