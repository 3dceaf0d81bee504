//! Soft-delete lifecycle: store, search projection, confirmation gate and trash view.

pub mod gate;
pub mod notify;
pub mod search;
pub mod store;
pub mod view;

pub use gate::{AlwaysDecline, AutoConfirm, ConfirmationGate};
pub use notify::{Notification, NotificationLevel, Notifier, TracingNotifier};
pub use store::{LifecycleStore, LoadState};
pub use view::{ActionOutcome, TrashView};
