//! Grounded place search client

use crate::config::{ClientConfig, API_KEY_VAR};
use crate::error::{ApiError, ApiResult};
use crate::places::{GenerateContentRequest, GenerateContentResponse, PlacesAnswer};
use aroundin_geo::Coordinate;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// API key header for the generative language API
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for place search grounded on Google Maps
///
/// One request per call: there is no retry, and overlapping calls are
/// independent. The client is cheap to clone.
#[derive(Clone)]
pub struct GroundedSearchClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl GroundedSearchClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("aroundin-api-client/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns true if an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Ask for places matching `query` around `location`
    ///
    /// # Errors
    ///
    /// Fails with [`ApiError::MissingApiKey`] before any request is sent when
    /// no key is configured, and with a transport, status or decoding error
    /// otherwise.
    #[instrument(skip(self, query), fields(request_id, query_len = query.len()))]
    pub async fn find_nearby_places(
        &self,
        query: &str,
        location: Coordinate,
    ) -> ApiResult<PlacesAnswer> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            error!("{API_KEY_VAR} environment variable not set");
            return Err(ApiError::MissingApiKey(API_KEY_VAR));
        };

        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let url = self.config.generate_content_url();
        let body = GenerateContentRequest::new(query, location);

        let start = Instant::now();
        let response = self
            .inner
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: GenerateContentResponse = self.handle_response(response).await?;
        let answer = parsed.into_answer();

        debug!(
            request_id = %request_id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            sources = answer.sources.len(),
            "Place search succeeded"
        );

        Ok(answer)
    }

    /// Handle HTTP response and deserialize
    async fn handle_response(&self, response: Response) -> ApiResult<GenerateContentResponse> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}
