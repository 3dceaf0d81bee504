pub mod adapter;
pub mod models;

pub use adapter::BookingAdapter;
pub use models::Booking;
