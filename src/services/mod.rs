pub mod api_client;
pub mod error;

pub use api_client::{ApiClient, PlayerApi};
pub use error::ApiError;
