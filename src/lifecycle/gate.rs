use async_trait::async_trait;

/// Confirmation step in front of irreversible actions
///
/// Returns a future rather than blocking, so the prompt can be a terminal read, a modal,
/// or a scripted answer in tests. Returning `false` must abort the action with no
/// request issued.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Confirms everything; backs the `--yes` flag
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationGate for AutoConfirm {
    async fn confirm(&self, message: &str) -> bool {
        tracing::debug!(prompt = %message, "Confirmation given by --yes");
        true
    }
}

/// Declines everything
pub struct AlwaysDecline;

#[async_trait]
impl ConfirmationGate for AlwaysDecline {
    async fn confirm(&self, _message: &str) -> bool {
        false
    }
}
