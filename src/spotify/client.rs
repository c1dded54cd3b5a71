use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{config, error::SpotifyError};

/// Source of bearer tokens for [`SpotifyClient`].
///
/// `access_token` hands out the current token if one is held and still
/// usable; `refresh_token` obtains a new one. Both return `None` when no
/// token can be produced.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Option<String>;
    async fn refresh_token(&self) -> Option<String>;
}

/// Thin authenticated client for the Spotify Web API.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    market: String,
    tokens: Arc<dyn TokenProvider>,
}

impl SpotifyClient {
    /// Creates a client that authenticates through `tokens`.
    ///
    /// Base URL and market come from `SPOTIFY_API_URL` and `SPOTIFY_MARKET`.
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: Client::new(),
            api_url: config::spotify_apiurl(),
            market: config::spotify_market(),
            tokens,
        }
    }

    /// Overrides the API base URL. A trailing `/` is dropped.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the market sent with top-track requests.
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    /// Builds `{api_url}/{path}` with URL-encoded query parameters.
    pub fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, SpotifyError> {
        let base = format!("{}/{}", self.api_url, path.trim_start_matches('/'));
        let parsed = if params.is_empty() {
            Url::parse(&base)
        } else {
            Url::parse_with_params(&base, params)
        };
        parsed.map_err(|e| SpotifyError::InvalidUrl(format!("{base}: {e}")))
    }

    /// Issues an authenticated GET and decodes the JSON body.
    ///
    /// # Arguments
    ///
    /// * `url` - Fully built request URL, usually from [`SpotifyClient::endpoint`]
    ///
    /// # Returns
    ///
    /// - `Ok(T)` - Decoded body of a 2xx response
    /// - `Err(SpotifyError::Unauthenticated)` - No token, or the refresh failed
    /// - `Err(SpotifyError::Http)` - Final response outside 2xx
    /// - `Err(SpotifyError::Request)` - Transport or decoding failure
    ///
    /// # Retry Logic
    ///
    /// A 401 answer triggers exactly one token refresh and one retry. If the
    /// token used for the first attempt was itself just refreshed, the 401 is
    /// not refreshed again and surfaces as an HTTP error, so no call performs
    /// more than one refresh or two requests.
    pub async fn fetch_with_auth<T: DeserializeOwned>(&self, url: Url) -> Result<T, SpotifyError> {
        let (token, refreshed) = match self.tokens.access_token().await {
            Some(token) => (token, false),
            None => {
                log::debug!("no usable access token, refreshing");
                let token = self
                    .tokens
                    .refresh_token()
                    .await
                    .ok_or(SpotifyError::Unauthenticated)?;
                (token, true)
            }
        };

        let mut response = self.send(&url, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED && !refreshed {
            log::debug!("401 from {}, refreshing token and retrying once", url.path());
            let token = self
                .tokens
                .refresh_token()
                .await
                .ok_or(SpotifyError::Unauthenticated)?;
            response = self.send(&url, &token).await?;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(SpotifyError::Http {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn send(&self, url: &Url, token: &str) -> Result<Response, SpotifyError> {
        log::debug!("GET {url}");
        Ok(self
            .http
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await?)
    }
}
