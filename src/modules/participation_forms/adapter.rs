use serde_json::Value;

use super::models::ParticipationForm;
use crate::core::traits::RecordAdapter;
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{EntityRoutes, HttpMethod};

pub struct ParticipationFormAdapter;

impl RecordAdapter for ParticipationFormAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::ParticipationForm
    }

    fn default_routes(&self) -> EntityRoutes {
        EntityRoutes::conventional(
            "puja-forms",
            "deleted",
            HttpMethod::Patch,
            "hard",
            &["/data/deletedItems", "/data", ""],
        )
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["participant", "whatsapp", "puja", "gotra"]
    }

    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>> {
        let form: ParticipationForm = serde_json::from_value(item)?;
        form.into_record(listing)
    }
}
