use serde::Deserialize;

use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::modules::fields::{lenient_string, name_or_string, RecordMeta};

/// Blog post as returned by the blogs endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "name_or_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "name_or_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
}

impl Blog {
    pub fn into_record(self, listing: Listing) -> Result<Option<DeletableRecord>> {
        Ok(self
            .meta
            .into_record(EntityKind::Blog, listing)?
            .map(|record| {
                record
                    .with_field("title", self.title)
                    .with_field("category", self.category)
                    .with_field("author", self.author)
                    .with_field("status", self.status)
            }))
    }
}
