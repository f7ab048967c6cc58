// ABOUTME: Collaborator layer for uniapp, sitting between a front-end and the record store.
// ABOUTME: Provides configuration, the composition root, the student controller and admin reports.

pub mod admin;
pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod error;

pub use bootstrap::open_store;
pub use config::{ConfigError, CorruptPolicy, PortalConfig};
pub use controller::{Controller, MAX_SUBJECTS};
pub use error::PortalError;
