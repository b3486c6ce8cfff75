use super::deserialize_some;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Class {
    pub id: i64,
    pub description: String,
    pub active: bool,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateClass {
    #[schema(example = "Turma A")]
    pub description: Option<String>,
    #[schema(example = true)]
    pub active: Option<bool>,
    pub teacher_id: Option<i64>,
}

/// Partial update. `teacher_id: null` detaches the class from its teacher.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateClass {
    pub description: Option<String>,
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i64>)]
    pub teacher_id: Option<Option<i64>>,
}

impl UpdateClass {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.active.is_none() && self.teacher_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn distinguishes_absent_and_null_teacher() {
        let absent: UpdateClass = serde_json::from_value(json!({ "active": false })).unwrap();
        assert_eq!(absent.teacher_id, None);
        let cleared: UpdateClass = serde_json::from_value(json!({ "teacher_id": null })).unwrap();
        assert_eq!(cleared.teacher_id, Some(None));
        assert!(!cleared.is_empty());
        let set: UpdateClass = serde_json::from_value(json!({ "teacher_id": 4 })).unwrap();
        assert_eq!(set.teacher_id, Some(Some(4)));
    }
}
