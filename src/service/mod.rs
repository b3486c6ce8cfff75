//! Entity services: validation, reference checks and SQL, all inside a caller-owned unit of work.

mod classes;
mod students;
mod teachers;
mod unit_of_work;
pub mod validation;
pub use classes::ClassService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use unit_of_work::UnitOfWork;
