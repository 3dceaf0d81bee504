use serde::Deserialize;

use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::modules::fields::{lenient_string, name_or_string, RecordMeta};

/// Bracelet product
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracelet {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "name_or_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
}

impl Bracelet {
    pub fn into_record(self, listing: Listing) -> Result<Option<DeletableRecord>> {
        let name = self.name.or(self.title);

        Ok(self
            .meta
            .into_record(EntityKind::Bracelet, listing)?
            .map(|record| {
                record
                    .with_field("name", name)
                    .with_field("category", self.category)
                    .with_field("price", self.price)
            }))
    }
}
