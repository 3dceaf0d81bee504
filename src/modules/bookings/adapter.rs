use serde_json::Value;

use super::models::Booking;
use crate::core::traits::RecordAdapter;
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{EntityRoutes, HttpMethod};

pub struct BookingAdapter;

impl RecordAdapter for BookingAdapter {
    fn kind(&self) -> EntityKind {
        EntityKind::Booking
    }

    fn default_routes(&self) -> EntityRoutes {
        EntityRoutes::conventional(
            "bookings",
            "trash",
            HttpMethod::Put,
            "hard-delete",
            &["/data/deletedItems", "/data", ""],
        )
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["name", "whatsapp", "puja", "status"]
    }

    fn parse_item(&self, item: Value, listing: Listing) -> Result<Option<DeletableRecord>> {
        let booking: Booking = serde_json::from_value(item)?;
        booking.into_record(listing)
    }
}
