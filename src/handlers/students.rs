//! Student handlers: one unit of work per request, finished exactly once.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{EntityId, JsonBody};
use crate::model::{CreateStudent, Student, UpdateStudent};
use crate::response::{confirmed, created, ok_many, ok_one, Confirmation};
use crate::service::{StudentService, UnitOfWork};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "All students", body = Vec<Student>),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = StudentService::list(&mut uow).await;
    let rows = uow.finish(result).await?;
    Ok(ok_many(rows))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn get_student(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = StudentService::get(&mut uow, id).await;
    let student = uow.finish(result).await?;
    Ok(ok_one(student))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student created", body = Confirmation),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Class not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateStudent>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = StudentService::create(&mut uow, req).await;
    let id = uow.finish(result).await?;
    Ok(created("student created", id))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = Confirmation),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Student or class not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn update_student(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateStudent>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = StudentService::update(&mut uow, id, req).await;
    uow.finish(result).await?;
    Ok(confirmed("student updated", id))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = Confirmation),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn delete_student(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = StudentService::delete(&mut uow, id).await;
    uow.finish(result).await?;
    Ok(confirmed("student deleted", id))
}
