// handlers/protected/mod.rs - endpoints behind `require_api_token`
//
// The token check runs as a route layer, so these handlers only see
// authorized requests.

pub mod products;

pub use products::{create as products_create, create_range as products_create_range};
