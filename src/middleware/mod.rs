pub mod auth;
pub mod response;

pub use auth::require_api_token;
pub use response::ApiResponse;
