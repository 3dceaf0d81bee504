pub mod client;
pub mod request_id;
pub mod routes;

pub use client::ApiClient;
pub use routes::{EntityRoutes, HttpMethod, RouteSpec};
