//! Class handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{EntityId, JsonBody};
use crate::model::{Class, CreateClass, Student, UpdateClass};
use crate::response::{confirmed, created, ok_many, ok_one, Confirmation};
use crate::service::{ClassService, UnitOfWork};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/classes",
    tag = "classes",
    responses(
        (status = 200, description = "All classes", body = Vec<Class>),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn list_classes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = ClassService::list(&mut uow).await;
    let rows = uow.finish(result).await?;
    Ok(ok_many(rows))
}

#[utoipa::path(
    get,
    path = "/classes/{id}",
    tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Class found", body = Class),
        (status = 404, description = "Class not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn get_class(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = ClassService::get(&mut uow, id).await;
    let class = uow.finish(result).await?;
    Ok(ok_one(class))
}

#[utoipa::path(
    get,
    path = "/classes/{id}/students",
    tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Students enrolled in the class", body = Vec<Student>),
        (status = 404, description = "Class not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn list_class_students(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let result = ClassService::students(&mut uow, id).await;
    let rows = uow.finish(result).await?;
    Ok(ok_many(rows))
}

#[utoipa::path(
    post,
    path = "/classes",
    tag = "classes",
    request_body = CreateClass,
    responses(
        (status = 201, description = "Class created", body = Confirmation),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Teacher not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn create_class(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateClass>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = ClassService::create(&mut uow, req).await;
    let id = uow.finish(result).await?;
    Ok(created("class created", id))
}

#[utoipa::path(
    put,
    path = "/classes/{id}",
    tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    request_body = UpdateClass,
    responses(
        (status = 200, description = "Class updated", body = Confirmation),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Class or teacher not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn update_class(
    EntityId(id): EntityId,
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateClass>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = ClassService::update(&mut uow, id, req).await;
    uow.finish(result).await?;
    Ok(confirmed("class updated", id))
}

#[utoipa::path(
    delete,
    path = "/classes/{id}",
    tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Class deleted", body = Confirmation),
        (status = 404, description = "Class not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody)
    )
)]
pub async fn delete_class(
    EntityId(id): EntityId,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut uow = UnitOfWork::begin_write(&state.pool).await?;
    let result = ClassService::delete(&mut uow, id).await;
    uow.finish(result).await?;
    Ok(confirmed("class deleted", id))
}
