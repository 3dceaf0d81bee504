pub mod adapter;
pub mod models;

pub use adapter::CategoryAdapter;
pub use models::Category;
