//! Row types and typed request bodies for teachers, classes and students.

pub mod class;
pub mod student;
pub mod teacher;

pub use class::{Class, CreateClass, UpdateClass};
pub use student::{final_average, CreateStudent, Student, UpdateStudent};
pub use teacher::{CreateTeacher, Teacher, UpdateTeacher};

use serde::{Deserialize, Deserializer};

/// For `Option<Option<T>>` update fields: absent stays `None`, explicit `null` becomes `Some(None)`.
/// Use together with `#[serde(default)]`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
