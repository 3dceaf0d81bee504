use serde::Deserialize;

use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::modules::fields::{lenient_string, name_or_string, RecordMeta};

/// Devotee's participation form for a puja
///
/// The only entity that carries an explicit `isDeleted` flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationForm {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default, deserialize_with = "lenient_string")]
    pub participant_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub whatsapp_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub whatsapp: Option<String>,
    #[serde(default, deserialize_with = "name_or_string")]
    pub puja: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub puja_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gotra: Option<String>,
}

impl ParticipationForm {
    pub fn into_record(self, listing: Listing) -> Result<Option<DeletableRecord>> {
        let participant = self.participant_name.or(self.name);
        let whatsapp = self.whatsapp_number.or(self.whatsapp);
        let puja = self.puja_title.or(self.puja);

        Ok(self
            .meta
            .into_record(EntityKind::ParticipationForm, listing)?
            .map(|record| {
                record
                    .with_field("participant", participant)
                    .with_field("whatsapp", whatsapp)
                    .with_field("puja", puja)
                    .with_field("gotra", self.gotra)
            }))
    }
}
