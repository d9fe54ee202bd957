//! In-process student store.
//!
//! Same ordering and search semantics as the PostgreSQL backend. Used by the
//! `--in-memory` development mode and by the handler tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, StudentStore};
use crate::models::student::{NewStudent, Student};

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Student>,
}

#[derive(Default)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[cfg(test)]
impl MemoryStudentStore {
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list(&self, search: Option<&str>, limit: i64) -> Result<Vec<Student>, StoreError> {
        let needle = search.map(str::to_lowercase);
        let inner = self.inner.read().await;

        let mut results: Vec<Student> = inner
            .rows
            .values()
            .filter(|s| needle.as_deref().is_none_or(|n| s.matches(n)))
            .cloned()
            .collect();
        results.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        results.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(results)
    }

    async fn get(&self, id: i64) -> Result<Option<Student>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, new_student: NewStudent) -> Result<Student, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let student = Student {
            id: inner.next_id,
            name: new_student.name,
            roll: new_student.roll,
            class_name: new_student.class_name,
            marks: new_student.marks,
            total: new_student.total,
            percent: new_student.percent,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn update(&self, id: i64, changes: NewStudent) -> Result<Option<Student>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(student) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        student.name = changes.name;
        student.roll = changes.roll;
        student.class_name = changes.class_name;
        student.marks = changes.marks;
        student.total = changes.total;
        student.percent = changes.percent;
        student.updated_at = Utc::now();
        Ok(Some(student.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::Marks;

    fn new_student(name: &str, roll: &str, class_name: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            roll: roll.to_string(),
            class_name: class_name.to_string(),
            marks: Marks::default(),
            total: 0.0,
            percent: 0.0,
        }
    }

    #[test]
    fn test_memory_store_implements_trait() {
        fn assert_store<S: StudentStore>() {}
        assert_store::<MemoryStudentStore>();
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStudentStore::new();
        let first = store.create(new_student("Asha", "R1", "10A")).await.unwrap();
        let second = store.create(new_student("Ben", "R2", "10A")).await.unwrap();

        let rows = store.list(None, 500).await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let store = MemoryStudentStore::new();
        for i in 0..5 {
            store
                .create(new_student("Student", &format!("R{i}"), ""))
                .await
                .unwrap();
        }
        assert_eq!(store.list(None, 3).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_partial() {
        let store = MemoryStudentStore::new();
        store.create(new_student("Asha", "ROLL-042", "10A")).await.unwrap();
        store.create(new_student("Ben", "ROLL-777", "9C")).await.unwrap();

        let rows = store.list(Some("roll-04"), 500).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Asha");

        let rows = store.list(Some("9c"), 500).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ben");

        assert!(store.list(Some("nobody"), 500).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_metacharacters_literally() {
        let store = MemoryStudentStore::new();
        store.create(new_student("axb", "R1", "")).await.unwrap();
        store.create(new_student("a.b", "R2", "")).await.unwrap();

        let rows = store.list(Some("a.b"), 500).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].roll, "R2");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_id() {
        let store = MemoryStudentStore::new();
        assert!(store.update(99, new_student("X", "R", "")).await.unwrap().is_none());
        assert!(!store.delete(99).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let store = MemoryStudentStore::new();
        let created = store.create(new_student("Asha", "R1", "10A")).await.unwrap();

        let updated = store
            .update(created.id, new_student("Asha K", "R1", "11A"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Asha K");
        assert_eq!(updated.class_name, "11A");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.len().await, 1);
    }
}
