use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::core::{AppError, EntityKind, Result};
use crate::http::routes::{EntityRoutes, RouteSpec};

/// Per-entity route overrides; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityRouteOverride {
    pub list: Option<RouteSpec>,
    pub deleted: Option<RouteSpec>,
    pub restore: Option<RouteSpec>,
    pub soft_delete: Option<RouteSpec>,
    pub hard_delete: Option<RouteSpec>,
    pub envelope: Option<Vec<String>>,
}

impl EntityRouteOverride {
    pub fn apply(&self, mut routes: EntityRoutes) -> EntityRoutes {
        if let Some(list) = &self.list {
            routes.list = list.clone();
        }
        if let Some(deleted) = &self.deleted {
            routes.deleted = deleted.clone();
        }
        if let Some(restore) = &self.restore {
            routes.restore = restore.clone();
        }
        if let Some(soft_delete) = &self.soft_delete {
            routes.soft_delete = soft_delete.clone();
        }
        if let Some(hard_delete) = &self.hard_delete {
            routes.hard_delete = hard_delete.clone();
        }
        if let Some(envelope) = &self.envelope {
            routes.envelope = envelope.clone();
        }
        routes
    }
}

/// Route overrides loaded from the YAML file named by `SEVADESK_ENDPOINTS_FILE`
///
/// ```yaml
/// blogs:
///   deleted: { method: GET, path: "blog/deleted" }
///   envelope: ["/deletedBlogs"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOverrides {
    entries: HashMap<EntityKind, EntityRouteOverride>,
}

impl RouteOverrides {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Cannot read endpoints file {}: {}",
                path.display(),
                e
            ))
        })?;
        let overrides = Self::from_yaml(&contents)?;

        tracing::info!(
            path = %path.display(),
            entities = overrides.entries.len(),
            "Loaded route overrides"
        );
        Ok(overrides)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: BTreeMap<String, EntityRouteOverride> = serde_yaml::from_str(contents)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            let kind: EntityKind = key.parse()?;
            if let Some(route) = [&entry.restore, &entry.soft_delete, &entry.hard_delete]
                .into_iter()
                .flatten()
                .find(|r| !r.needs_id())
            {
                return Err(AppError::Configuration(format!(
                    "Route '{}' for {} is missing the {{id}} placeholder",
                    route, kind
                )));
            }
            if entries.insert(kind, entry).is_some() {
                return Err(AppError::Configuration(format!(
                    "Entity {} is configured more than once",
                    kind
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, kind: EntityKind) -> Option<&EntityRouteOverride> {
        self.entries.get(&kind)
    }

    /// Defaults for `kind` with any override applied
    pub fn resolve(&self, kind: EntityKind, defaults: EntityRoutes) -> EntityRoutes {
        match self.get(kind) {
            Some(entry) => entry.apply(defaults),
            None => defaults,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
