//! PostgreSQL backend over a deadpool of async diesel connections.

use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::{like_pattern, StoreError, StudentStore};
use crate::models::student::{NewStudent, Student};
use crate::schema::students;

pub type PgPool = Pool<AsyncPgConnection>;

pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    /// Build the pool. No connection is opened until the first checkout.
    pub fn new(database_url: &str, max_connections: usize) -> anyhow::Result<Self> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let pool = Pool::builder(manager)
            .max_size(max_connections)
            .build()
            .map_err(|e| anyhow::anyhow!("diesel pool: {e}"))?;
        Ok(Self { pool })
    }

    /// Create the schema if it does not exist yet.
    pub async fn run_migration(&self) -> anyhow::Result<()> {
        let mut conn = self.conn().await?;
        crate::migration::run_migration(&mut conn).await
    }

    async fn conn(&self) -> Result<Object<AsyncPgConnection>, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self, search: Option<&str>, limit: i64) -> Result<Vec<Student>, StoreError> {
        let mut conn = self.conn().await?;
        list_students(&mut conn, search, limit).await
    }

    async fn get(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let mut conn = self.conn().await?;
        find_student(&mut conn, id).await
    }

    async fn create(&self, new_student: NewStudent) -> Result<Student, StoreError> {
        let mut conn = self.conn().await?;
        insert_student(&mut conn, new_student).await
    }

    async fn update(&self, id: i64, changes: NewStudent) -> Result<Option<Student>, StoreError> {
        let mut conn = self.conn().await?;
        update_student(&mut conn, id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.conn().await?;
        delete_student(&mut conn, id).await
    }

    async fn close(&self) {
        self.pool.close();
    }
}

/// List students, newest first, optionally filtered by a literal search term.
pub async fn list_students(
    conn: &mut AsyncPgConnection,
    search: Option<&str>,
    limit: i64,
) -> Result<Vec<Student>, StoreError> {
    let mut query = students::table
        .select(Student::as_select())
        .into_boxed::<Pg>();

    if let Some(q) = search {
        let pattern = like_pattern(q);
        query = query.filter(
            students::name
                .ilike(pattern.clone())
                .or(students::roll.ilike(pattern.clone()))
                .or(students::class_name.ilike(pattern)),
        );
    }

    let results = query
        .order((students::created_at.desc(), students::id.desc()))
        .limit(limit)
        .load::<Student>(conn)
        .await?;
    Ok(results)
}

/// Find a student by id.
pub async fn find_student(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> Result<Option<Student>, StoreError> {
    let result = students::table
        .find(id)
        .select(Student::as_select())
        .first::<Student>(conn)
        .await
        .optional()?;
    Ok(result)
}

/// Insert a new student.
pub async fn insert_student(
    conn: &mut AsyncPgConnection,
    new_student: NewStudent,
) -> Result<Student, StoreError> {
    let result = diesel::insert_into(students::table)
        .values(&new_student)
        .returning(Student::as_returning())
        .get_result::<Student>(conn)
        .await?;
    Ok(result)
}

/// Overwrite a student's fields and bump `updated_at`.
pub async fn update_student(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: NewStudent,
) -> Result<Option<Student>, StoreError> {
    let result = diesel::update(students::table.find(id))
        .set((&changes, students::updated_at.eq(Utc::now())))
        .returning(Student::as_returning())
        .get_result::<Student>(conn)
        .await
        .optional()?;
    Ok(result)
}

/// Delete a student by id.
pub async fn delete_student(conn: &mut AsyncPgConnection, id: i64) -> Result<bool, StoreError> {
    let removed = diesel::delete(students::table.find(id))
        .execute(conn)
        .await?;
    Ok(removed > 0)
}
