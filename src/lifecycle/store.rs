use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::search;
use crate::core::traits::TrashRepository;
use crate::core::{AppError, DeletableRecord, EntityKind, Result};

/// Where the store is in fetching its list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Restore,
    HardDelete,
}

impl Mutation {
    fn as_str(&self) -> &'static str {
        match self {
            Mutation::Restore => "restore",
            Mutation::HardDelete => "hard_delete",
        }
    }
}

struct StoreState {
    records: Vec<DeletableRecord>,
    load_state: LoadState,
    busy: HashSet<String>,
}

/// In-memory list of one entity's soft-deleted records for a single view
///
/// The backend stays the source of truth: the list is replaced wholesale by `load`, and
/// rows are only removed after the backend confirmed a restore or hard delete. Methods
/// take `&self` and never hold the lock across an await, so actions on different ids
/// can run concurrently.
pub struct LifecycleStore {
    repository: Arc<dyn TrashRepository>,
    search_fields: &'static [&'static str],
    state: Mutex<StoreState>,
}

impl LifecycleStore {
    pub fn new(repository: Arc<dyn TrashRepository>) -> Self {
        Self {
            repository,
            search_fields: &[],
            state: Mutex::new(StoreState {
                records: Vec::new(),
                load_state: LoadState::Loading,
                busy: HashSet::new(),
            }),
        }
    }

    /// Restrict `search` to these display fields (default: all of them)
    pub fn with_search_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.search_fields = fields;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.repository.kind()
    }

    pub fn repository(&self) -> &Arc<dyn TrashRepository> {
        &self.repository
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the deleted listing and replace the whole list with it
    ///
    /// On failure the list is emptied and the error kept in `load_state`.
    pub async fn load(&self) -> Result<usize> {
        self.lock().load_state = LoadState::Loading;

        match self.repository.list_deleted().await {
            Ok(records) => {
                let count = records.len();
                let mut state = self.lock();
                state.records = records;
                state.load_state = LoadState::Loaded;
                info!(entity = %self.kind(), count, "Trash loaded");
                Ok(count)
            }
            Err(e) => {
                let mut state = self.lock();
                state.records.clear();
                state.load_state = LoadState::Error(e.to_string());
                warn!(entity = %self.kind(), error = %e, "Trash load failed");
                Err(e)
            }
        }
    }

    /// Records matching `term` on the designated fields; the list itself is not touched
    pub fn search(&self, term: &str) -> Vec<DeletableRecord> {
        search::project(&self.lock().records, term, self.search_fields)
    }

    pub fn records(&self) -> Vec<DeletableRecord> {
        self.lock().records.clone()
    }

    pub fn get(&self, id: &str) -> Option<DeletableRecord> {
        self.lock().records.iter().find(|r| r.id == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().records.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    pub fn load_state(&self) -> LoadState {
        self.lock().load_state.clone()
    }

    /// Whether a restore or hard delete for `id` is pending
    pub fn is_busy(&self, id: &str) -> bool {
        self.lock().busy.contains(id)
    }

    /// Drop `id` from the local list after a confirmed restore
    pub fn apply_restore(&self, id: &str) -> bool {
        self.remove(id)
    }

    /// Drop `id` from the local list after a confirmed hard delete
    pub fn apply_hard_delete(&self, id: &str) -> bool {
        self.remove(id)
    }

    fn remove(&self, id: &str) -> bool {
        let mut state = self.lock();
        let before = state.records.len();
        state.records.retain(|r| r.id != id);
        state.records.len() != before
    }

    /// Restore `id` on the backend, then drop it locally
    pub async fn restore(&self, id: &str) -> Result<()> {
        self.run(id, Mutation::Restore).await
    }

    /// Purge `id` on the backend, then drop it locally
    ///
    /// Only ids present in the loaded trash are accepted, so an active record can never
    /// be purged through the store.
    pub async fn hard_delete(&self, id: &str) -> Result<()> {
        self.run(id, Mutation::HardDelete).await
    }

    async fn run(&self, id: &str, mutation: Mutation) -> Result<()> {
        let _guard = self.begin(id)?;

        let result = match mutation {
            Mutation::Restore => self.repository.restore(id).await,
            Mutation::HardDelete => self.repository.hard_delete(id).await,
        };

        match result {
            Ok(()) => {
                let removed = match mutation {
                    Mutation::Restore => self.apply_restore(id),
                    Mutation::HardDelete => self.apply_hard_delete(id),
                };
                if !removed {
                    // A reload replaced the list while the request was pending
                    debug!(entity = %self.kind(), id = %id, "Row already gone after mutation");
                }
                Ok(())
            }
            Err(e) => {
                warn!(
                    entity = %self.kind(),
                    id = %id,
                    action = mutation.as_str(),
                    error = %e,
                    "Mutation failed; row kept"
                );
                Err(e)
            }
        }
    }

    /// Mark `id` busy, refusing unknown and already-busy ids
    fn begin(&self, id: &str) -> Result<BusyGuard<'_>> {
        let mut state = self.lock();

        if !state.records.iter().any(|r| r.id == id) {
            return Err(AppError::not_found(format!(
                "{} '{}' is not in the trash",
                self.kind().label(),
                id
            )));
        }
        if !state.busy.insert(id.to_string()) {
            return Err(AppError::InFlight(id.to_string()));
        }

        Ok(BusyGuard {
            store: self,
            id: id.to_string(),
        })
    }
}

/// Clears the busy mark when the mutation finishes or its future is dropped
struct BusyGuard<'a> {
    store: &'a LifecycleStore,
    id: String,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.store.lock().busy.remove(&self.id);
    }
}
