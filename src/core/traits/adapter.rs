use serde_json::Value;

use crate::core::entity::EntityKind;
use crate::core::envelope::extract_items;
use crate::core::error::Result;
use crate::core::record::{DeletableRecord, Listing};
use crate::http::routes::EntityRoutes;

/// Per-entity boundary adapter that turns a raw listing response into records
///
/// The storefront API wraps lists differently per entity (`[...]`, `{data: [...]}`,
/// `{data: {deletedBlogs: [...]}}`, ...). Adapters absorb that so the lifecycle store only
/// ever sees `DeletableRecord`s.
pub trait RecordAdapter: Send + Sync {
    fn kind(&self) -> EntityKind;

    /// Endpoints and envelope pointers the backend uses for this entity
    fn default_routes(&self) -> EntityRoutes;

    /// Display fields that `search` matches against
    fn search_fields(&self) -> &'static [&'static str];

    /// Decode one list item. `Ok(None)` drops the item, e.g. a trashed row that leaked
    /// into an active listing.
    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>>;

    /// Unwrap the envelope and decode every item
    ///
    /// Undecodable items are skipped with a warning instead of failing the whole listing.
    fn normalize(
        &self,
        raw: &Value,
        pointers: &[String],
        listing: Listing,
    ) -> Result<Vec<DeletableRecord>> {
        let items = extract_items(raw, pointers)?;
        let total = items.len();

        let mut records = Vec::with_capacity(total);
        for item in items {
            match self.parse_item(item, listing) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(entity = %self.kind(), error = %e, "Skipping undecodable record");
                }
            }
        }

        if records.len() != total {
            tracing::debug!(
                entity = %self.kind(),
                kept = records.len(),
                total,
                "Dropped records while normalizing listing"
            );
        }

        Ok(records)
    }
}
