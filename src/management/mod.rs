mod auth;

pub use auth::ClientCredentials;
pub use auth::TokenManager;
pub use auth::is_expired;
