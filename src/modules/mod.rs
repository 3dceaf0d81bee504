//! Per-entity adapters and the REST repository they plug into.

pub mod blogs;
pub mod bookings;
pub mod bracelets;
pub mod categories;
pub mod fields;
pub mod participation_forms;
pub mod pujas;
pub mod repository;
pub mod rudraksha;

use std::sync::Arc;

use crate::config::RouteOverrides;
use crate::core::traits::RecordAdapter;
use crate::core::EntityKind;
use crate::http::ApiClient;
use crate::lifecycle::LifecycleStore;

pub use repository::RestTrashRepository;

/// Adapter for an entity type
pub fn adapter_for(kind: EntityKind) -> Arc<dyn RecordAdapter> {
    match kind {
        EntityKind::Blog => Arc::new(blogs::BlogAdapter),
        EntityKind::Puja => Arc::new(pujas::PujaAdapter),
        EntityKind::Booking => Arc::new(bookings::BookingAdapter),
        EntityKind::Category => Arc::new(categories::CategoryAdapter),
        EntityKind::Bracelet => Arc::new(bracelets::BraceletAdapter),
        EntityKind::Rudraksha => Arc::new(rudraksha::RudrakshaAdapter),
        EntityKind::ParticipationForm => Arc::new(participation_forms::ParticipationFormAdapter),
    }
}

/// REST repository client for an entity type, with route overrides applied
pub fn repository_for(
    kind: EntityKind,
    api: ApiClient,
    overrides: &RouteOverrides,
) -> RestTrashRepository {
    RestTrashRepository::new(api, adapter_for(kind), overrides)
}

/// Lifecycle store for an entity type, searching the entity's designated fields
pub fn store_for(kind: EntityKind, api: ApiClient, overrides: &RouteOverrides) -> LifecycleStore {
    let adapter = adapter_for(kind);
    let fields = adapter.search_fields();
    let repository = RestTrashRepository::new(api, adapter, overrides);
    LifecycleStore::new(Arc::new(repository)).with_search_fields(fields)
}
