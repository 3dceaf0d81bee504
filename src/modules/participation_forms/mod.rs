pub mod adapter;
pub mod models;

pub use adapter::ParticipationFormAdapter;
pub use models::ParticipationForm;
