pub mod adapter;
pub mod models;

pub use adapter::BlogAdapter;
pub use models::Blog;
