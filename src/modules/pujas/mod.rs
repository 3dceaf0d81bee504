pub mod adapter;
pub mod models;

pub use adapter::PujaAdapter;
pub use models::Puja;
