use serde_json::Value;

use super::models::Bracelet;
use crate::core::traits::RecordAdapter;
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{EntityRoutes, HttpMethod};

pub struct BraceletAdapter;

impl RecordAdapter for BraceletAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::Bracelet
    }

    fn default_routes(&self) -> EntityRoutes {
        EntityRoutes::conventional(
            "bracelets",
            "deleted",
            HttpMethod::Put,
            "hard-delete",
            &["/data", ""],
        )
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["name", "category"]
    }

    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>> {
        let bracelet: Bracelet = serde_json::from_value(item)?;
        bracelet.into_record(listing)
    }
}
