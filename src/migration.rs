//! Schema DDL: teachers, classes and students tables, created when missing.

use crate::error::AppError;
use sqlx::SqlitePool;

/// Tables in dependency order. Foreign keys are declared but not enforced (see `store`).
const TABLES: &[(&str, &str)] = &[
    (
        "teachers",
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "classes",
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            active BOOLEAN NOT NULL,
            teacher_id INTEGER NULL REFERENCES teachers(id)
        )
        "#,
    ),
    (
        "students",
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            birth_date DATE NOT NULL,
            first_semester_grade REAL NULL,
            second_semester_grade REAL NULL,
            final_average REAL NULL,
            class_id INTEGER NULL REFERENCES classes(id)
        )
        "#,
    ),
];

/// Names of the tables this service owns.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}

/// Create every table that does not exist yet. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(tables = TABLES.len(), "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connect_in_memory;

    #[tokio::test]
    async fn creates_all_tables_and_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let names: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('teachers', 'classes', 'students') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<_> = names.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["classes", "students", "teachers"]);
    }
}
