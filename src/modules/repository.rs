use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::config::RouteOverrides;
use crate::core::traits::{RecordAdapter, TrashRepository};
use crate::core::{DeletableRecord, EntityKind, Listing, Result};
use crate::http::routes::{validate_id, EntityRoutes, RouteSpec};
use crate::http::ApiClient;

/// `TrashRepository` over the storefront REST API, parameterised by an entity adapter
pub struct RestTrashRepository {
    api: ApiClient,
    routes: EntityRoutes,
    adapter: Arc<dyn RecordAdapter>,
}

impl RestTrashRepository {
    pub fn new(api: ApiClient, adapter: Arc<dyn RecordAdapter>, overrides: &RouteOverrides) -> Self {
        let routes = overrides.resolve(adapter.kind(), adapter.default_routes());
        Self {
            api,
            routes,
            adapter,
        }
    }

    pub fn routes(&self) -> &EntityRoutes {
        &self.routes
    }

    pub fn adapter(&self) -> &Arc<dyn RecordAdapter> {
        &self.adapter
    }

    async fn fetch(&self, route: &RouteSpec, listing: Listing) -> Result<Vec<DeletableRecord>> {
        let kind = self.adapter.kind();
        let result = async {
            let raw = self.api.fetch_json(route).await?;
            self.adapter.normalize(&raw, &self.routes.envelope, listing)
        }
        .await;

        match &result {
            Ok(records) => info!(
                entity = %kind,
                listing = ?listing,
                count = records.len(),
                "Fetched records"
            ),
            Err(e) => error!(
                entity = %kind,
                listing = ?listing,
                error = %e,
                "Failed to fetch records"
            ),
        }

        result
    }

    async fn mutate(&self, route: &RouteSpec, id: &str, action: &'static str) -> Result<()> {
        let kind = self.adapter.kind();
        validate_id(id)?;

        info!(entity = %kind, id = %id, action, route = %route, "Sending lifecycle request");

        match self.api.execute(route, id).await {
            Ok(()) => {
                info!(entity = %kind, id = %id, action, "Lifecycle request succeeded");
                Ok(())
            }
            Err(e) => {
                error!(entity = %kind, id = %id, action, error = %e, "Lifecycle request failed");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl TrashRepository for RestTrashRepository {
    fn kind(&self) -> EntityKind {
        self.adapter.kind()
    }

    async fn list(&self) -> Result<Vec<DeletableRecord>> {
        self.fetch(&self.routes.list, Listing::Active).await
    }

    async fn list_deleted(&self) -> Result<Vec<DeletableRecord>> {
        self.fetch(&self.routes.deleted, Listing::Deleted).await
    }

    async fn restore(&self, id: &str) -> Result<()> {
        self.mutate(&self.routes.restore, id, "restore").await
    }

    async fn soft_delete(&self, id: &str) -> Result<()> {
        self.mutate(&self.routes.soft_delete, id, "soft_delete").await
    }

    async fn hard_delete(&self, id: &str) -> Result<()> {
        self.mutate(&self.routes.hard_delete, id, "hard_delete").await
    }
}
