// ABOUTME: Persistence layer for uniapp, owning the student collection and its backing file.
// ABOUTME: Provides the RecordStore CRUD API and the atomic snapshot codec beneath it.

pub mod error;
pub mod record_store;
pub mod snapshot;

pub use error::StoreError;
pub use record_store::RecordStore;
pub use snapshot::{load_students, save_students};
