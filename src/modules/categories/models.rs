use serde::Deserialize;

use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::modules::fields::{lenient_string, RecordMeta};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
}

impl Category {
    pub fn into_record(self, listing: Listing) -> Result<Option<DeletableRecord>> {
        Ok(self
            .meta
            .into_record(EntityKind::Category, listing)?
            .map(|record| record.with_field("name", self.name).with_field("slug", self.slug)))
    }
}
