//! Response helpers: plain representations for reads, confirmations for writes.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by create, update and delete.
#[derive(Serialize, ToSchema)]
pub struct Confirmation {
    pub message: String,
    pub id: i64,
}

pub fn created(message: impl Into<String>, id: i64) -> (StatusCode, Json<Confirmation>) {
    (
        StatusCode::CREATED,
        Json(Confirmation {
            message: message.into(),
            id,
        }),
    )
}

pub fn confirmed(message: impl Into<String>, id: i64) -> (StatusCode, Json<Confirmation>) {
    (
        StatusCode::OK,
        Json(Confirmation {
            message: message.into(),
            id,
        }),
    )
}

pub fn ok_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
