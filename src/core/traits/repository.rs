use async_trait::async_trait;

use crate::core::entity::EntityKind;
use crate::core::error::Result;
use crate::core::record::DeletableRecord;

/// Lifecycle operations the storefront API exposes for one entity type
///
/// Implementations translate each intent into exactly one backend call and never cache.
/// Ids are opaque backend identifiers.
#[async_trait]
pub trait TrashRepository: Send + Sync {
    /// Entity type this repository serves
    fn kind(&self) -> EntityKind;

    /// Records currently in the active state
    async fn list(&self) -> Result<Vec<DeletableRecord>>;

    /// Records currently soft-deleted (the trash bucket)
    async fn list_deleted(&self) -> Result<Vec<DeletableRecord>>;

    /// Move a deleted record back to active
    async fn restore(&self, id: &str) -> Result<()>;

    /// Move an active record into the trash bucket
    async fn soft_delete(&self, id: &str) -> Result<()>;

    /// Permanently remove a record. Irreversible.
    async fn hard_delete(&self, id: &str) -> Result<()>;
}
