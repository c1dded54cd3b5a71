use std::path::PathBuf;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{config, error::TokenError, spotify::TokenProvider, types::Token};

/// Seconds before expiry at which a held token is no longer handed out.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Application credentials used for Basic auth against the token endpoint.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: Option<String>,
}

impl ClientCredentials {
    /// Reads `SPOTIFY_API_AUTH_CLIENT_ID` / `SPOTIFY_API_AUTH_CLIENT_SECRET`.
    pub fn from_env() -> Option<Self> {
        config::spotify_client_id().map(|client_id| Self {
            client_id,
            client_secret: config::spotify_client_secret(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

/// Holds the current access token and knows how to obtain a new one.
///
/// A held refresh token is exchanged through the `refresh_token` grant;
/// without one the manager falls back to the `client_credentials` grant,
/// which is enough for the catalogue endpoints playlists are built from.
pub struct TokenManager {
    http: Client,
    token_url: String,
    credentials: Option<ClientCredentials>,
    cache_path: Option<PathBuf>,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    /// Creates a manager around an optional existing token.
    ///
    /// # Arguments
    ///
    /// * `token` - Previously obtained token, or `None` to start empty
    /// * `credentials` - Client id/secret used by both grants; without them
    ///   only a held refresh token can be exchanged
    ///
    /// The token endpoint defaults to `SPOTIFY_API_TOKEN_URL` and nothing is
    /// persisted until [`TokenManager::with_cache`] sets a path.
    pub fn new(token: Option<Token>, credentials: Option<ClientCredentials>) -> Self {
        TokenManager {
            http: Client::new(),
            token_url: config::spotify_apitoken_url(),
            credentials,
            cache_path: None,
            token: Mutex::new(token),
        }
    }

    /// Overrides the token endpoint URL.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Persist every newly obtained token to `path`.
    pub fn with_cache(mut self, path: PathBuf) -> Self {
        self.cache_path = Some(path);
        self
    }

    /// Builds a manager from the on-disk token cache and the configured
    /// client credentials. A missing cache yields a manager without a token.
    pub async fn load() -> Result<Self, TokenError> {
        let path = config::token_cache_path();
        let token = match async_fs::read_to_string(&path).await {
            Ok(content) => Some(
                serde_json::from_str::<Token>(&content)
                    .map_err(|e| TokenError::Cache(e.to_string()))?,
            ),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(TokenError::Cache(e.to_string())),
        };

        Ok(Self::new(token, ClientCredentials::from_env()).with_cache(path))
    }

    /// Writes the held token as pretty JSON to the cache path.
    ///
    /// Does nothing when no cache path is set or no token is held. Missing
    /// parent directories are created.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Token written, or nothing to write
    /// - `Err(TokenError::Cache)` - Directory creation, serialization or write failed
    pub async fn persist(&self) -> Result<(), TokenError> {
        let Some(path) = &self.cache_path else {
            return Ok(());
        };
        let Some(token) = self.token.lock().await.clone() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| TokenError::Cache(e.to_string()))?;
        }

        let json =
            serde_json::to_string_pretty(&token).map_err(|e| TokenError::Cache(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| TokenError::Cache(e.to_string()))
    }

    /// Snapshot of the held token, expired or not.
    pub async fn current_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }

    /// Requests a new token, stores it and writes it to the cache.
    ///
    /// With a held refresh token the `refresh_token` grant is used, otherwise
    /// the `client_credentials` grant. A response without a new refresh token
    /// keeps the previous one; a missing `expires_in` counts as one hour.
    ///
    /// # Returns
    ///
    /// - `Ok(Token)` - The freshly obtained token, already stored
    /// - `Err(TokenError)` - Missing credentials, endpoint rejection,
    ///   transport failure or cache write failure
    pub async fn renew(&self) -> Result<Token, TokenError> {
        let previous = self.token.lock().await.clone();
        let refresh_token = previous.as_ref().and_then(|t| t.refresh_token.clone());

        let response = match &refresh_token {
            Some(refresh_token) => self.request_refresh_grant(refresh_token).await?,
            None => self.request_client_credentials_grant().await?,
        };

        let token = Token {
            access_token: response.access_token.ok_or(TokenError::MissingAccessToken)?,
            // Spotify may omit the refresh token when it does not rotate it.
            refresh_token: response.refresh_token.or(refresh_token),
            scope: response.scope,
            expires_in: response.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        };

        *self.token.lock().await = Some(token.clone());
        self.persist().await?;
        Ok(token)
    }

    async fn request_refresh_grant(&self, refresh_token: &str) -> Result<TokenResponse, TokenError> {
        log::debug!("refreshing access token with refresh_token grant");
        let mut form = vec![
            ("grant_type", "refresh_token".to_string()),
            ("refresh_token", refresh_token.to_string()),
        ];
        if let Some(creds) = &self.credentials {
            form.push(("client_id", creds.client_id.clone()));
        }

        let mut request = self.http.post(&self.token_url).form(&form);
        if let Some(auth) = self.basic_auth() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Self::read_token_response(request.send().await?).await
    }

    async fn request_client_credentials_grant(&self) -> Result<TokenResponse, TokenError> {
        log::debug!("requesting access token with client_credentials grant");
        let auth = self.basic_auth().ok_or(TokenError::MissingCredentials)?;
        let response = self
            .http
            .post(&self.token_url)
            .header(reqwest::header::AUTHORIZATION, auth)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        Self::read_token_response(response).await
    }

    async fn read_token_response(response: reqwest::Response) -> Result<TokenResponse, TokenError> {
        let status = response.status();
        if !status.is_success() {
            return Err(TokenError::Endpoint(status.as_u16()));
        }
        Ok(response.json::<TokenResponse>().await?)
    }

    fn basic_auth(&self) -> Option<String> {
        let creds = self.credentials.as_ref()?;
        let secret = creds.client_secret.as_ref()?;
        let encoded = STANDARD.encode(format!("{}:{}", creds.client_id, secret));
        Some(format!("Basic {encoded}"))
    }
}

/// Whether `token` expires within the safety margin at `now`.
///
/// `now` is a UNIX timestamp in seconds. Tokens are treated as expired
/// four minutes early so an in-flight request never races the expiry.
pub fn is_expired(token: &Token, now: u64) -> bool {
    now + EXPIRY_MARGIN_SECS >= token.obtained_at + token.expires_in
}

#[async_trait]
impl TokenProvider for TokenManager {
    async fn access_token(&self) -> Option<String> {
        let now = Utc::now().timestamp() as u64;
        self.token
            .lock()
            .await
            .as_ref()
            .filter(|t| !t.access_token.is_empty() && !is_expired(t, now))
            .map(|t| t.access_token.clone())
    }

    async fn refresh_token(&self) -> Option<String> {
        match self.renew().await {
            Ok(token) => Some(token.access_token),
            Err(e) => {
                log::warn!("token refresh failed: {e}");
                None
            }
        }
    }
}
