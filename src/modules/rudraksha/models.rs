use serde::Deserialize;

use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::modules::fields::{lenient_string, RecordMeta};

/// Rudraksha bead product; `mukhi` is the face count (1-21)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rudraksha {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mukhi: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
}

impl Rudraksha {
    pub fn into_record(self, listing: Listing) -> Result<Option<DeletableRecord>> {
        let name = self.name.or(self.title);

        Ok(self
            .meta
            .into_record(EntityKind::Rudraksha, listing)?
            .map(|record| {
                record
                    .with_field("name", name)
                    .with_field("mukhi", self.mukhi)
                    .with_field("price", self.price)
            }))
    }
}
