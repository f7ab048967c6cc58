// ABOUTME: Error type for portal operations that a front-end reports back to the user.
// ABOUTME: Wraps store failures alongside validation and session errors.

use thiserror::Error;
use uniapp_store::StoreError;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    #[error("invalid password format")]
    InvalidPassword,

    #[error("student {0} already exists")]
    AlreadyRegistered(String),

    #[error("no student is logged in")]
    NotLoggedIn,

    #[error("students are allowed to enrol in {0} subjects only")]
    EnrolmentFull(usize),

    #[error("subject {0} not found")]
    SubjectNotFound(String),

    #[error("passwords do not match")]
    PasswordMismatch,

    /// The logged-in student's record disappeared from the store.
    #[error("student {0} no longer exists")]
    StudentMissing(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
