use serde::Deserialize;

use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::modules::fields::{lenient_string, name_or_string, RecordMeta};

/// Puja listing as managed from the admin panel
///
/// Older documents use `name`/`templeName` where newer ones use `title`/`location`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puja {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub temple_name: Option<String>,
    #[serde(default, deserialize_with = "name_or_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

impl Puja {
    pub fn into_record(self, listing: Listing) -> Result<Option<DeletableRecord>> {
        let title = self.title.or(self.name);
        let location = self.location.or(self.temple_name);

        Ok(self
            .meta
            .into_record(EntityKind::Puja, listing)?
            .map(|record| {
                record
                    .with_field("title", title)
                    .with_field("location", location)
                    .with_field("category", self.category)
                    .with_field("date", self.date)
            }))
    }
}
