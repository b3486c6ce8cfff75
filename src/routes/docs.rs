//! Generated OpenAPI document and the Swagger UI page that renders it.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{classes, students, teachers};
use crate::model::{Class, CreateClass, CreateStudent, CreateTeacher, Student, Teacher, UpdateClass, UpdateStudent, UpdateTeacher};
use crate::response::Confirmation;
use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "School API", description = "Students, classes and teachers"),
    paths(
        teachers::list_teachers,
        teachers::get_teacher,
        teachers::list_teacher_classes,
        teachers::create_teacher,
        teachers::update_teacher,
        teachers::delete_teacher,
        classes::list_classes,
        classes::get_class,
        classes::list_class_students,
        classes::create_class,
        classes::update_class,
        classes::delete_class,
        students::list_students,
        students::get_student,
        students::create_student,
        students::update_student,
        students::delete_student,
    ),
    components(schemas(
        Teacher,
        CreateTeacher,
        UpdateTeacher,
        Class,
        CreateClass,
        UpdateClass,
        Student,
        CreateStudent,
        UpdateStudent,
        Confirmation,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "teachers", description = "Teacher records"),
        (name = "classes", description = "Class records"),
        (name = "students", description = "Student records")
    )
)]
pub struct ApiDoc;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/apidocs";

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>School API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
                layout: 'StandaloneLayout'
            });
        };
    </script>
</body>
</html>
"#;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// GET /api-docs/openapi.json and GET /apidocs (Swagger UI).
pub fn docs_routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi))
        .route(SWAGGER_UI_PATH, get(swagger_ui))
}
