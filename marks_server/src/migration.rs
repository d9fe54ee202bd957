//! Idempotent schema setup for the students table.

use diesel_async::AsyncPgConnection;
use diesel_async::SimpleAsyncConnection;

/// SQL migration for the student marks tables.
pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id              BIGSERIAL PRIMARY KEY,
    name            TEXT NOT NULL,
    roll            TEXT NOT NULL,
    class_name      TEXT NOT NULL DEFAULT '',
    marks           JSONB NOT NULL DEFAULT '{"math": 0, "science": 0, "english": 0}',
    total           DOUBLE PRECISION NOT NULL DEFAULT 0,
    percent         DOUBLE PRECISION NOT NULL DEFAULT 0,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Tables created with bounded VARCHAR columns are widened in place.
ALTER TABLE students
    ALTER COLUMN name TYPE TEXT,
    ALTER COLUMN roll TYPE TEXT,
    ALTER COLUMN class_name TYPE TEXT;

CREATE INDEX IF NOT EXISTS idx_students_roll ON students (roll);
CREATE INDEX IF NOT EXISTS idx_students_created ON students (created_at DESC);
"#;

/// Run the students migration.
pub async fn run_migration(conn: &mut AsyncPgConnection) -> anyhow::Result<()> {
    conn.batch_execute(MIGRATION_SQL)
        .await
        .map_err(|e| anyhow::anyhow!("students migration failed: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_columns_are_unbounded() {
        assert!(!MIGRATION_SQL.contains("VARCHAR"));
        for column in ["name", "roll", "class_name"] {
            assert!(MIGRATION_SQL.contains(&format!("ALTER COLUMN {column} TYPE TEXT")));
        }
    }

    #[test]
    fn test_migration_is_idempotent_ddl() {
        assert!(MIGRATION_SQL.contains("CREATE TABLE IF NOT EXISTS students"));
        assert!(MIGRATION_SQL.contains("CREATE INDEX IF NOT EXISTS idx_students_roll"));
    }
}
