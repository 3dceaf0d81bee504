// Shared fixtures for integration tests
//
// Include from a test crate with:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use sevadesk::config::ApiConfig;
use sevadesk::core::traits::TrashRepository;
use sevadesk::core::{AppError, DeletableRecord, EntityKind, LifecycleState, Result};
use sevadesk::lifecycle::{ConfirmationGate, Notification, Notifier};

/// API config pointed at a mock server
pub fn api_config(uri: &str) -> ApiConfig {
    ApiConfig::new(uri)
}

/// Soft-deleted blog with a title and author
pub fn deleted_blog(id: &str, title: &str, author: &str) -> DeletableRecord {
    DeletableRecord::new(id, LifecycleState::Deleted)
        .with_field("title", Some(title))
        .with_field("author", Some(author))
}

/// Notifier that keeps every notification for later assertions
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.all().into_iter().filter(|n| n.is_error()).collect()
    }

    pub fn successes(&self) -> Vec<Notification> {
        self.all().into_iter().filter(|n| !n.is_error()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// Gate answering with a fixed value and counting prompts
pub struct ScriptedGate {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGate {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationGate for ScriptedGate {
    async fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer
    }
}

/// In-memory backend holding active and deleted records of one entity
///
/// Mirrors what the storefront API does: restore moves a deleted record back to active,
/// hard delete removes a deleted record for good, and both refuse records in the wrong
/// state.
pub struct FakeBackend {
    kind: EntityKind,
    active: Mutex<BTreeMap<String, DeletableRecord>>,
    deleted: Mutex<BTreeMap<String, DeletableRecord>>,
    fail_mutations: bool,
    pub mutation_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            active: Mutex::new(BTreeMap::new()),
            deleted: Mutex::new(BTreeMap::new()),
            fail_mutations: false,
            mutation_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub fn with_deleted(self, records: impl IntoIterator<Item = DeletableRecord>) -> Self {
        {
            let mut deleted = self.deleted.lock().unwrap();
            for record in records {
                deleted.insert(record.id.clone(), record);
            }
        }
        self
    }

    pub fn with_active(self, ids: &[&str]) -> Self {
        {
            let mut active = self.active.lock().unwrap();
            for id in ids {
                active.insert(
                    id.to_string(),
                    DeletableRecord::new(*id, LifecycleState::Active),
                );
            }
        }
        self
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().keys().cloned().collect()
    }

    pub fn active_ids(&self) -> Vec<String> {
        self.active.lock().unwrap().keys().cloned().collect()
    }

    pub fn calls(&self) -> usize {
        self.mutation_calls.load(Ordering::SeqCst)
    }

    fn begin_mutation(&self) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations {
            return Err(AppError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TrashRepository for FakeBackend {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    async fn list(&self) -> Result<Vec<DeletableRecord>> {
        Ok(self.active.lock().unwrap().values().cloned().collect())
    }

    async fn list_deleted(&self) -> Result<Vec<DeletableRecord>> {
        Ok(self.deleted.lock().unwrap().values().cloned().collect())
    }

    async fn restore(&self, id: &str) -> Result<()> {
        self.begin_mutation()?;
        let record = self
            .deleted
            .lock()
            .unwrap()
            .remove(id)
            .ok_or_else(|| AppError::rejected(format!("{} is not deleted", id)))?;

        let mut restored = DeletableRecord::new(record.id.clone(), LifecycleState::Active);
        restored.fields = record.fields;
        self.active.lock().unwrap().insert(id.to_string(), restored);
        Ok(())
    }

    async fn soft_delete(&self, id: &str) -> Result<()> {
        self.begin_mutation()?;
        let record = self
            .active
            .lock()
            .unwrap()
            .remove(id)
            .ok_or_else(|| AppError::not_found(id.to_string()))?;

        let mut trashed = DeletableRecord::new(record.id.clone(), LifecycleState::Deleted);
        trashed.fields = record.fields;
        self.deleted.lock().unwrap().insert(id.to_string(), trashed);
        Ok(())
    }

    async fn hard_delete(&self, id: &str) -> Result<()> {
        self.begin_mutation()?;
        self.deleted
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::rejected(format!("{} is not in the trash", id)))
    }
}
