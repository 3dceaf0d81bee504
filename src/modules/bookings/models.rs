use serde::Deserialize;

use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::modules::fields::{lenient_string, name_or_string, RecordMeta};

/// Puja booking placed by a customer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub whatsapp_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    /// Populated puja reference or its id
    #[serde(default, deserialize_with = "name_or_string")]
    pub puja: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub puja_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
}

impl Booking {
    pub fn into_record(self, listing: Listing) -> Result<Option<DeletableRecord>> {
        let name = self.name.or(self.full_name);
        let whatsapp = self.whatsapp_number.or(self.phone);
        let puja = self.puja_name.or(self.puja);

        Ok(self
            .meta
            .into_record(EntityKind::Booking, listing)?
            .map(|record| {
                record
                    .with_field("name", name)
                    .with_field("whatsapp", whatsapp)
                    .with_field("puja", puja)
                    .with_field("status", self.status)
            }))
    }
}
