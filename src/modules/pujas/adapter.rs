use serde_json::Value;

use super::models::Puja;
use crate::core::traits::RecordAdapter;
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{EntityRoutes, HttpMethod};

pub struct PujaAdapter;

impl RecordAdapter for PujaAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::Puja
    }

    fn default_routes(&self) -> EntityRoutes {
        EntityRoutes::conventional(
            "pujas",
            "deleted",
            HttpMethod::Put,
            "hard-delete",
            &["/data", "/data/data", ""],
        )
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["title", "location", "category"]
    }

    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>> {
        let puja: Puja = serde_json::from_value(item)?;
        puja.into_record(listing)
    }
}
