pub mod adapter;
pub mod models;

pub use adapter::BraceletAdapter;
pub use models::Bracelet;
