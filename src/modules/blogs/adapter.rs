use serde_json::Value;

use super::models::Blog;
use crate::core::traits::RecordAdapter;
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{EntityRoutes, HttpMethod};

/// Blogs answer the trash listing as `{ data: { deletedBlogs: [...] } }`
pub struct BlogAdapter;

impl RecordAdapter for BlogAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::Blog
    }

    fn default_routes(&self) -> EntityRoutes {
        EntityRoutes::conventional(
            "blogs",
            "trash",
            HttpMethod::Patch,
            "hard",
            &["/data/deletedBlogs", "/data", ""],
        )
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["title", "category", "author"]
    }

    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>> {
        let blog: Blog = serde_json::from_value(item)?;
        blog.into_record(listing)
    }
}
