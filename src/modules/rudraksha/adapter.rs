use serde_json::Value;

use super::models::Rudraksha;
use crate::core::traits::RecordAdapter;
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{EntityRoutes, HttpMethod};

pub struct RudrakshaAdapter;

impl RecordAdapter for RudrakshaAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::Rudraksha
    }

    fn default_routes(&self) -> EntityRoutes {
        EntityRoutes::conventional(
            "rudraksha",
            "deleted",
            HttpMethod::Put,
            "hard-delete",
            &["/data", ""],
        )
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["name", "mukhi"]
    }

    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>> {
        let rudraksha: Rudraksha = serde_json::from_value(item)?;
        rudraksha.into_record(listing)
    }
}
