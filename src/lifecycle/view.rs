use std::sync::Arc;

use futures_util::future::join_all;

use super::gate::ConfirmationGate;
use super::notify::{Notification, Notifier};
use super::store::{LifecycleStore, LoadState};
use crate::core::{AppError, DeletableRecord};

/// Result of one row action
#[derive(Debug)]
pub enum ActionOutcome {
    Restored,
    Purged,
    /// The operator declined the confirmation; nothing was sent
    Declined,
    /// A request for this row is still pending; nothing was sent
    InFlight,
    Failed(AppError),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Restored | ActionOutcome::Purged)
    }
}

/// Trash view for one entity: binds a store to a confirmation gate and a notifier
///
/// Every failure ends up as a notification; nothing here returns an error.
pub struct TrashView {
    store: LifecycleStore,
    gate: Arc<dyn ConfirmationGate>,
    notifier: Arc<dyn Notifier>,
}

impl TrashView {
    pub fn new(
        store: LifecycleStore,
        gate: Arc<dyn ConfirmationGate>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            gate,
            notifier,
        }
    }

    pub fn store(&self) -> &LifecycleStore {
        &self.store
    }

    /// Load the trash; a failure leaves an empty table and an error notification
    pub async fn mount(&self) -> LoadState {
        if let Err(e) = self.store.load().await {
            self.notifier.notify(Notification::error(format!(
                "Failed to load deleted {}: {}",
                self.store.kind(),
                e
            )));
        }
        self.store.load_state()
    }

    pub fn rows(&self) -> Vec<DeletableRecord> {
        self.store.records()
    }

    pub fn search(&self, term: &str) -> Vec<DeletableRecord> {
        self.store.search(term)
    }

    /// Row buttons are disabled while that row's request is pending
    pub fn is_action_disabled(&self, id: &str) -> bool {
        self.store.is_busy(id)
    }

    /// Restore one row; reversible, so no confirmation
    pub async fn restore(&self, id: &str) -> ActionOutcome {
        let label = self.store.kind().label();

        match self.store.restore(id).await {
            Ok(()) => {
                self.notifier
                    .notify(Notification::success(format!("{} restored", label)));
                ActionOutcome::Restored
            }
            Err(AppError::InFlight(_)) => ActionOutcome::InFlight,
            Err(e) => {
                self.notifier.notify(Notification::error(format!(
                    "Failed to restore {} '{}': {}",
                    label.to_lowercase(),
                    id,
                    e
                )));
                ActionOutcome::Failed(e)
            }
        }
    }

    /// Restore several rows concurrently; each resolves on its own
    pub async fn restore_many(&self, ids: &[String]) -> Vec<(String, ActionOutcome)> {
        let outcomes = join_all(ids.iter().map(|id| self.restore(id))).await;
        ids.iter().cloned().zip(outcomes).collect()
    }

    /// Permanently delete one row after explicit confirmation
    pub async fn purge(&self, id: &str) -> ActionOutcome {
        let label = self.store.kind().label();

        if self.store.is_busy(id) {
            return ActionOutcome::InFlight;
        }

        let Some(record) = self.store.get(id) else {
            let e = AppError::not_found(format!("{} '{}' is not in the trash", label, id));
            self.notifier.notify(Notification::error(e.to_string()));
            return ActionOutcome::Failed(e);
        };

        let prompt = format!(
            "Permanently delete {} \"{}\"? This cannot be undone.",
            label.to_lowercase(),
            describe(&record)
        );
        if !self.gate.confirm(&prompt).await {
            tracing::info!(entity = %self.store.kind(), id = %id, "Purge declined");
            return ActionOutcome::Declined;
        }

        match self.store.hard_delete(id).await {
            Ok(()) => {
                self.notifier.notify(Notification::success(format!(
                    "{} permanently deleted",
                    label
                )));
                ActionOutcome::Purged
            }
            Err(AppError::InFlight(_)) => ActionOutcome::InFlight,
            Err(e) => {
                self.notifier.notify(Notification::error(format!(
                    "Failed to delete {} '{}': {}",
                    label.to_lowercase(),
                    id,
                    e
                )));
                ActionOutcome::Failed(e)
            }
        }
    }
}

/// First display field, falling back to the id
fn describe(record: &DeletableRecord) -> String {
    ["title", "name", "participant"]
        .iter()
        .find_map(|f| record.field(f))
        .or_else(|| record.fields.values().next().map(String::as_str))
        .unwrap_or(&record.id)
        .to_string()
}
