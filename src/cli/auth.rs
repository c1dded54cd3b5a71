use crate::{
    config, error,
    management::{ClientCredentials, TokenManager},
    success,
};

/// Obtains a token through the client-credentials grant and caches it.
pub async fn auth() {
    let Some(credentials) = ClientCredentials::from_env() else {
        error!("SPOTIFY_API_AUTH_CLIENT_ID must be set");
    };
    if credentials.client_secret.is_none() {
        error!("SPOTIFY_API_AUTH_CLIENT_SECRET must be set");
    }

    let token_mgr =
        TokenManager::new(None, Some(credentials)).with_cache(config::token_cache_path());

    match token_mgr.renew().await {
        Ok(token) => success!(
            "Authentication successful! Token valid for {} seconds.",
            token.expires_in
        ),
        Err(e) => error!("Authentication failed. Err: {}", e),
    }
}
