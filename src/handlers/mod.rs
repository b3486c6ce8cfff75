//! HTTP handlers for teacher, class and student CRUD.

pub mod classes;
pub mod students;
pub mod teachers;
pub use classes::*;
pub use students::*;
pub use teachers::*;
