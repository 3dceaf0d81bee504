//! Sevadesk back-office library
//!
//! Soft-delete lifecycle management (trash, restore, purge) for the storefront's
//! entities, on top of the storefront REST API.

pub mod cli;
pub mod config;
pub mod core;
pub mod http;
pub mod lifecycle;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, DeletableRecord, EntityKind, LifecycleState, Result};
pub use lifecycle::{LifecycleStore, TrashView};
