//! Teacher handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{EntityId, JsonBody};
use crate::model::{Class, CreateTeacher, Teacher, UpdateTeacher};
use crate::response::{confirmed, created, ok_many, ok_one, Confirmation};
use crate::service::{TeacherService, UnitOfWork};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/teachers",
    tag = "teachers",
    responses(
        (status = 200, description = "All teachers", body = Vec<Teacher>),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn list_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = TeacherService::list(&mut uow).await;
    let rows = uow.finish(result).await?;
    Ok(ok_many(rows))
}

#[utoipa::path(
    get,
    path = "/teachers/{id}",
    tag = "teachers",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 404, description = "Teacher not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn get_teacher(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = TeacherService::get(&mut uow, id).await;
    let teacher = uow.finish(result).await?;
    Ok(ok_one(teacher))
}

#[utoipa::path(
    get,
    path = "/teachers/{id}/classes",
    tag = "teachers",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Classes taught by the teacher", body = Vec<Class>),
        (status = 404, description = "Teacher not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn list_teacher_classes(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = TeacherService::classes(&mut uow, id).await;
    let rows = uow.finish(result).await?;
    Ok(ok_many(rows))
}

#[utoipa::path(
    post,
    path = "/teachers",
    tag = "teachers",
    request_body = CreateTeacher,
    responses(
        (status = 201, description = "Teacher created", body = Confirmation),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTeacher>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = TeacherService::create(&mut uow, req).await;
    let id = uow.finish(result).await?;
    Ok(created("teacher created", id))
}

#[utoipa::path(
    put,
    path = "/teachers/{id}",
    tag = "teachers",
    params(("id" = i64, Path, description = "Teacher id")),
    request_body = UpdateTeacher,
    responses(
        (status = 200, description = "Teacher updated", body = Confirmation),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Teacher not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn update_teacher(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateTeacher>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = TeacherService::update(&mut uow, id, req).await;
    uow.finish(result).await?;
    Ok(confirmed("teacher updated", id))
}

#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    tag = "teachers",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher deleted", body = Confirmation),
        (status = 404, description = "Teacher not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn delete_teacher(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = TeacherService::delete(&mut uow, id).await;
    uow.finish(result).await?;
    Ok(confirmed("teacher deleted", id))
}
