use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a storefront record
///
/// A record is in exactly one of these at a time. `Purged` records no longer exist on the
/// backend and are only ever observed as the outcome of a hard delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Active,
    Deleted,
    Purged,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Active => write!(f, "active"),
            LifecycleState::Deleted => write!(f, "deleted"),
            LifecycleState::Purged => write!(f, "purged"),
        }
    }
}

/// Which listing endpoint a batch of records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Active,
    Deleted,
}

impl Listing {
    pub fn state(self) -> LifecycleState {
        match self {
            Listing::Active => LifecycleState::Active,
            Listing::Deleted => LifecycleState::Deleted,
        }
    }
}

/// Entity-agnostic view of a soft-deletable record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletableRecord {
    pub id: String,
    pub state: LifecycleState,
    pub deleted_at: Option<DateTime<Utc>>,
    /// Display fields used for search and table rendering, keyed by field name
    pub fields: BTreeMap<String, String>,
}

impl DeletableRecord {
    pub fn new(id: impl Into<String>, state: LifecycleState) -> Self {
        Self {
            id: id.into(),
            state,
            deleted_at: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_deleted_at(mut self, deleted_at: Option<DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    /// Add a display field; blank values are skipped
    pub fn with_field(mut self, name: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            let value = value.into();
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.fields.insert(name.to_string(), trimmed.to_string());
            }
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is_deleted(&self) -> bool {
        self.state == LifecycleState::Deleted
    }
}
