//! Entity CRUD routes for teachers, classes and students.

use crate::handlers::{
    create_class, create_student, create_teacher, delete_class, delete_student, delete_teacher, get_class,
    get_student, get_teacher, list_class_students, list_classes, list_students, list_teacher_classes,
    list_teachers, update_class, update_student, update_teacher,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route(
            "/teachers/:id",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
        .route("/teachers/:id/classes", get(list_teacher_classes))
        .route("/classes", get(list_classes).post(create_class))
        .route(
            "/classes/:id",
            get(get_class).put(update_class).delete(delete_class),
        )
        .route("/classes/:id/students", get(list_class_students))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}
