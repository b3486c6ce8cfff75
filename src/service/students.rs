//! Student CRUD. Keeps `final_average` in step with the two semester grades.

use super::validation::{non_empty, non_negative, parse_date, required};
use super::{ClassService, UnitOfWork};
use crate::error::AppError;
use crate::model::{final_average, CreateStudent, Student, UpdateStudent};

const SELECT_STUDENT: &str = "SELECT id, name, age, birth_date, first_semester_grade, second_semester_grade, \
     final_average, class_id FROM students";

pub struct StudentService;

impl StudentService {
    pub async fn list(uow: &mut UnitOfWork) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(&format!("{} ORDER BY id", SELECT_STUDENT))
            .fetch_all(uow.conn())
            .await?;
        Ok(rows)
    }

    pub async fn by_class(uow: &mut UnitOfWork, class_id: i64) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(&format!("{} WHERE class_id = ? ORDER BY id", SELECT_STUDENT))
            .bind(class_id)
            .fetch_all(uow.conn())
            .await?;
        Ok(rows)
    }

    pub async fn get(uow: &mut UnitOfWork, id: i64) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!("{} WHERE id = ?", SELECT_STUDENT))
            .bind(id)
            .fetch_optional(uow.conn())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
    }

    pub async fn create(uow: &mut UnitOfWork, req: CreateStudent) -> Result<i64, AppError> {
        let name = non_empty("name", &required("name", req.name)?)?;
        let age = non_negative("age", required("age", req.age)?)?;
        let birth_date = parse_date("birth_date", &required("birth_date", req.birth_date)?)?;
        if let Some(class_id) = req.class_id {
            ClassService::ensure_exists(uow, class_id).await?;
        }
        let average = final_average(req.first_semester_grade, req.second_semester_grade);
        let id = sqlx::query(
            "INSERT INTO students (name, age, birth_date, first_semester_grade, second_semester_grade, \
             final_average, class_id) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&name)
        .bind(age)
        .bind(birth_date)
        .bind(req.first_semester_grade)
        .bind(req.second_semester_grade)
        .bind(average)
        .bind(req.class_id)
        .execute(uow.conn())
        .await?
        .last_insert_rowid();
        tracing::info!(student_id = id, "student created");
        Ok(id)
    }

    /// Applies only the supplied fields. A bad class reference fails before anything is written.
    pub async fn update(uow: &mut UnitOfWork, id: i64, req: UpdateStudent) -> Result<(), AppError> {
        if req.is_empty() {
            return Err(AppError::Validation("no fields to update".into()));
        }
        let mut student = Self::get(uow, id).await?;
        if let Some(name) = req.name {
            student.name = non_empty("name", &name)?;
        }
        if let Some(age) = req.age {
            student.age = non_negative("age", age)?;
        }
        if let Some(birth_date) = req.birth_date {
            student.birth_date = parse_date("birth_date", &birth_date)?;
        }
        if let Some(class_id) = req.class_id {
            if let Some(cid) = class_id {
                ClassService::ensure_exists(uow, cid).await?;
            }
            student.class_id = class_id;
        }
        if let Some(grade) = req.first_semester_grade {
            student.first_semester_grade = grade;
        }
        if let Some(grade) = req.second_semester_grade {
            student.second_semester_grade = grade;
        }
        student.refresh_average();

        sqlx::query(
            "UPDATE students SET name = ?, age = ?, birth_date = ?, first_semester_grade = ?, \
             second_semester_grade = ?, final_average = ?, class_id = ? WHERE id = ?",
        )
        .bind(&student.name)
        .bind(student.age)
        .bind(student.birth_date)
        .bind(student.first_semester_grade)
        .bind(student.second_semester_grade)
        .bind(student.final_average)
        .bind(student.class_id)
        .bind(id)
        .execute(uow.conn())
        .await?;
        tracing::info!(student_id = id, "student updated");
        Ok(())
    }

    pub async fn delete(uow: &mut UnitOfWork, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(uow.conn())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("student {}", id)));
        }
        tracing::info!(student_id = id, "student deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use crate::model::CreateClass;
    use crate::store::connect_in_memory;

    async fn fresh() -> (sqlx::SqlitePool, UnitOfWork) {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let uow = UnitOfWork::begin(&pool).await.unwrap();
        (pool, uow)
    }

    fn ana() -> CreateStudent {
        CreateStudent {
            name: Some("Ana".into()),
            age: Some(15),
            birth_date: Some("2009-03-02".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_computes_average() {
        let (_pool, mut uow) = fresh().await;
        let id = StudentService::create(
            &mut uow,
            CreateStudent {
                first_semester_grade: Some(7.5),
                second_semester_grade: Some(8.0),
                ..ana()
            },
        )
        .await
        .unwrap();
        let s = StudentService::get(&mut uow, id).await.unwrap();
        assert_eq!(s.final_average, Some(7.75));
        assert_eq!(s.birth_date.to_string(), "2009-03-02");
    }

    #[tokio::test]
    async fn create_requires_birth_date() {
        let (_pool, mut uow) = fresh().await;
        let err = StudentService::create(
            &mut uow,
            CreateStudent {
                birth_date: None,
                ..ana()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(m) if m == "birth_date is required"));
    }

    #[tokio::test]
    async fn update_grade_recomputes_and_clears_average() {
        let (_pool, mut uow) = fresh().await;
        let id = StudentService::create(&mut uow, ana()).await.unwrap();

        let set_second = UpdateStudent {
            second_semester_grade: Some(Some(9.0)),
            ..Default::default()
        };
        StudentService::update(&mut uow, id, set_second).await.unwrap();
        assert_eq!(StudentService::get(&mut uow, id).await.unwrap().final_average, None);

        let set_first = UpdateStudent {
            first_semester_grade: Some(Some(6.0)),
            ..Default::default()
        };
        StudentService::update(&mut uow, id, set_first).await.unwrap();
        assert_eq!(StudentService::get(&mut uow, id).await.unwrap().final_average, Some(7.5));

        let clear_first = UpdateStudent {
            first_semester_grade: Some(None),
            ..Default::default()
        };
        StudentService::update(&mut uow, id, clear_first).await.unwrap();
        let s = StudentService::get(&mut uow, id).await.unwrap();
        assert_eq!(s.first_semester_grade, None);
        assert_eq!(s.second_semester_grade, Some(9.0));
        assert_eq!(s.final_average, None);
    }

    #[tokio::test]
    async fn update_with_unknown_class_changes_nothing() {
        let (_pool, mut uow) = fresh().await;
        let id = StudentService::create(&mut uow, ana()).await.unwrap();
        let before = StudentService::get(&mut uow, id).await.unwrap();
        let req = UpdateStudent {
            name: Some("Bia".into()),
            class_id: Some(Some(42)),
            ..Default::default()
        };
        let err = StudentService::update(&mut uow, id, req).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(StudentService::get(&mut uow, id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn by_class_filters_enrolled_students() {
        let (_pool, mut uow) = fresh().await;
        let class_id = ClassService::create(
            &mut uow,
            CreateClass {
                description: Some("Turma A".into()),
                active: Some(true),
                teacher_id: None,
            },
        )
        .await
        .unwrap();
        StudentService::create(&mut uow, ana()).await.unwrap();
        let enrolled = StudentService::create(
            &mut uow,
            CreateStudent {
                class_id: Some(class_id),
                ..ana()
            },
        )
        .await
        .unwrap();
        let rows = ClassService::students(&mut uow, class_id).await.unwrap();
        assert_eq!(rows.iter().map(|s| s.id).collect::<Vec<_>>(), vec![enrolled]);
    }
}
