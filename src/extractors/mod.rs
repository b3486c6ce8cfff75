pub mod json;

pub use json::{EntityId, JsonBody};
