pub mod adapter;
pub mod models;

pub use adapter::RudrakshaAdapter;
pub use models::Rudraksha;
