//! Teacher CRUD.

use super::validation::{non_empty, required};
use super::UnitOfWork;
use crate::error::AppError;
use crate::model::{Class, CreateTeacher, Teacher, UpdateTeacher};

pub struct TeacherService;

impl TeacherService {
    pub async fn list(uow: &mut UnitOfWork) -> Result<Vec<Teacher>, AppError> {
        let rows = sqlx::query_as::<_, Teacher>("SELECT id, name FROM teachers ORDER BY id")
            .fetch_all(uow.conn())
            .await?;
        Ok(rows)
    }

    pub async fn get(uow: &mut UnitOfWork, id: i64) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>("SELECT id, name FROM teachers WHERE id = ?")
            .bind(id)
            .fetch_optional(uow.conn())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("teacher {}", id)))
    }

    /// Fails with `NotFound` unless a teacher with `id` exists.
    pub async fn ensure_exists(uow: &mut UnitOfWork, id: i64) -> Result<(), AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM teachers WHERE id = ?")
            .bind(id)
            .fetch_optional(uow.conn())
            .await?;
        found.map(|_| ()).ok_or_else(|| AppError::NotFound(format!("teacher {}", id)))
    }

    pub async fn create(uow: &mut UnitOfWork, req: CreateTeacher) -> Result<i64, AppError> {
        let name = non_empty("name", &required("name", req.name)?)?;
        let id = sqlx::query("INSERT INTO teachers (name) VALUES (?)")
            .bind(&name)
            .execute(uow.conn())
            .await?
            .last_insert_rowid();
        tracing::info!(teacher_id = id, "teacher created");
        Ok(id)
    }

    pub async fn update(uow: &mut UnitOfWork, id: i64, req: UpdateTeacher) -> Result<(), AppError> {
        if req.is_empty() {
            return Err(AppError::Validation("no fields to update".into()));
        }
        let mut teacher = Self::get(uow, id).await?;
        if let Some(name) = req.name {
            teacher.name = non_empty("name", &name)?;
        }
        sqlx::query("UPDATE teachers SET name = ? WHERE id = ?")
            .bind(&teacher.name)
            .bind(id)
            .execute(uow.conn())
            .await?;
        tracing::info!(teacher_id = id, "teacher updated");
        Ok(())
    }

    /// Classes taught by this teacher are left untouched.
    pub async fn delete(uow: &mut UnitOfWork, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(uow.conn())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("teacher {}", id)));
        }
        tracing::info!(teacher_id = id, "teacher deleted");
        Ok(())
    }

    pub async fn classes(uow: &mut UnitOfWork, id: i64) -> Result<Vec<Class>, AppError> {
        Self::ensure_exists(uow, id).await?;
        let rows = sqlx::query_as::<_, Class>(
            "SELECT id, description, active, teacher_id FROM classes WHERE teacher_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(uow.conn())
        .await?;
        Ok(rows)
    }
}
