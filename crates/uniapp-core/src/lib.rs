// ABOUTME: Core library for uniapp, containing the student and subject domain types.
// ABOUTME: This crate defines the shared data model used by the store and the portal.

pub mod model;
pub mod subject;
pub mod validator;

pub use model::{Student, generate_student_id};
pub use subject::{Grade, Subject};
