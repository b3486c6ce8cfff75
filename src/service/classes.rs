//! Class CRUD. A supplied teacher reference must resolve before anything is written.

use super::validation::{non_empty, required};
use super::{TeacherService, UnitOfWork};
use crate::error::AppError;
use crate::model::{Class, CreateClass, Student, UpdateClass};

const SELECT_CLASS: &str = "SELECT id, description, active, teacher_id FROM classes";

pub struct ClassService;

impl ClassService {
    pub async fn list(uow: &mut UnitOfWork) -> Result<Vec<Class>, AppError> {
        let rows = sqlx::query_as::<_, Class>(&format!("{} ORDER BY id", SELECT_CLASS))
            .fetch_all(uow.conn())
            .await?;
        Ok(rows)
    }

    pub async fn get(uow: &mut UnitOfWork, id: i64) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(&format!("{} WHERE id = ?", SELECT_CLASS))
            .bind(id)
            .fetch_optional(uow.conn())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("class {}", id)))
    }

    pub async fn ensure_exists(uow: &mut UnitOfWork, id: i64) -> Result<(), AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(uow.conn())
            .await?;
        found.map(|_| ()).ok_or_else(|| AppError::NotFound(format!("class {}", id)))
    }

    pub async fn create(uow: &mut UnitOfWork, req: CreateClass) -> Result<i64, AppError> {
        let description = non_empty("description", &required("description", req.description)?)?;
        let active = required("active", req.active)?;
        if let Some(teacher_id) = req.teacher_id {
            TeacherService::ensure_exists(uow, teacher_id).await?;
        }
        let id = sqlx::query("INSERT INTO classes (description, active, teacher_id) VALUES (?, ?, ?)")
            .bind(&description)
            .bind(active)
            .bind(req.teacher_id)
            .execute(uow.conn())
            .await?
            .last_insert_rowid();
        tracing::info!(class_id = id, "class created");
        Ok(id)
    }

    pub async fn update(uow: &mut UnitOfWork, id: i64, req: UpdateClass) -> Result<(), AppError> {
        if req.is_empty() {
            return Err(AppError::Validation("no fields to update".into()));
        }
        let mut class = Self::get(uow, id).await?;
        if let Some(description) = req.description {
            class.description = non_empty("description", &description)?;
        }
        if let Some(active) = req.active {
            class.active = active;
        }
        if let Some(teacher_id) = req.teacher_id {
            if let Some(tid) = teacher_id {
                TeacherService::ensure_exists(uow, tid).await?;
            }
            class.teacher_id = teacher_id;
        }
        sqlx::query("UPDATE classes SET description = ?, active = ?, teacher_id = ? WHERE id = ?")
            .bind(&class.description)
            .bind(class.active)
            .bind(class.teacher_id)
            .bind(id)
            .execute(uow.conn())
            .await?;
        tracing::info!(class_id = id, "class updated");
        Ok(())
    }

    /// Students enrolled in this class keep their `class_id`.
    pub async fn delete(uow: &mut UnitOfWork, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(uow.conn())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("class {}", id)));
        }
        tracing::info!(class_id = id, "class deleted");
        Ok(())
    }

    pub async fn students(uow: &mut UnitOfWork, id: i64) -> Result<Vec<Student>, AppError> {
        Self::ensure_exists(uow, id).await?;
        super::StudentService::by_class(uow, id).await
    }
}
