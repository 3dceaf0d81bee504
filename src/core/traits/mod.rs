pub mod adapter;
pub mod repository;

pub use adapter::RecordAdapter;
pub use repository::TrashRepository;
