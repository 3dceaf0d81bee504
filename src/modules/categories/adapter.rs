use serde_json::Value;

use super::models::Category;
use crate::core::traits::RecordAdapter;
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{EntityRoutes, HttpMethod};

pub struct CategoryAdapter;

impl RecordAdapter for CategoryAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::Category
    }

    fn default_routes(&self) -> EntityRoutes {
        EntityRoutes::conventional(
            "categories",
            "trash",
            HttpMethod::Patch,
            "hard",
            &["/data/deletedItems", "/data", ""],
        )
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["name", "slug"]
    }

    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>> {
        let category: Category = serde_json::from_value(item)?;
        category.into_record(listing)
    }
}
