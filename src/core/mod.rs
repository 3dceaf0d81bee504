pub mod entity;
pub mod envelope;
pub mod error;
pub mod record;
pub mod timezone;
pub mod traits;

pub use entity::EntityKind;
pub use error::{AppError, Result};
pub use record::{DeletableRecord, LifecycleState, Listing};
