use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTeacher {
    #[schema(example = "Maria Souza")]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTeacher {
    pub name: Option<String>,
}

impl UpdateTeacher {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
