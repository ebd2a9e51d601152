//! `DesignApi` and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use courtside_core::ApiError;
use courtside_designer::{AiDesignRequest, SaveDesignRequest};
use courtside_settings::ApiSettings;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::endpoints;

/// Header carrying the per-save deduplication key
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Longest error body kept in `ApiError::Status`
const MAX_ERROR_BODY: usize = 512;

/// The storefront endpoints used by the designer
#[async_trait]
pub trait DesignApi: Send + Sync {
    /// Submits a design. Any 2xx answer is a success.
    async fn save_design(
        &self,
        request: &SaveDesignRequest,
        idempotency_key: Option<Uuid>,
    ) -> Result<(), ApiError>;

    /// Asks for better element placement.
    async fn optimize_placement(&self, request: &AiDesignRequest) -> Result<Value, ApiError>;

    /// Asks for a garment color scheme.
    async fn color_scheme(&self, request: &AiDesignRequest) -> Result<Value, ApiError>;

    /// Asks for free-text design suggestions.
    async fn suggestions(&self, request: &AiDesignRequest) -> Result<Value, ApiError>;
}

/// `DesignApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpDesignApi {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpDesignApi {
    /// Creates a client for `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim()).map_err(|_| ApiError::InvalidUrl {
            url: base_url.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl {
                url: base_url.to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Creates a client around a preconfigured `reqwest::Client`.
    ///
    /// `timeout` is only used to report `ApiError::Timeout`; the client's
    /// own timeout applies.
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut api = Self::new(base_url, timeout)?;
        api.client = client;
        Ok(api)
    }

    /// Creates a client from the API settings section.
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        Self::new(&settings.base_url, Duration::from_millis(settings.timeout_ms))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an endpoint path.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = format!("{}{}", base, path);
        Url::parse(&url).map_err(|_| ApiError::InvalidUrl { url })
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                timeout_ms: self.timeout_ms(),
            }
        } else {
            ApiError::Transport {
                reason: e.to_string(),
            }
        }
    }

    /// POSTs a JSON body and returns the JSON answer (`Null` when empty).
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        idempotency_key: Option<Uuid>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(url.clone()).json(body);
        if let Some(key) = idempotency_key {
            request = request.header(IDEMPOTENCY_HEADER, key.to_string());
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            tracing::warn!("POST {} returned {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            reason: e.to_string(),
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[async_trait]
impl DesignApi for HttpDesignApi {
    async fn save_design(
        &self,
        request: &SaveDesignRequest,
        idempotency_key: Option<Uuid>,
    ) -> Result<(), ApiError> {
        // The save endpoint's body is not used; only the status matters.
        match self
            .post(endpoints::SAVE_DESIGN, request, idempotency_key)
            .await
        {
            Ok(_) | Err(ApiError::Decode { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn optimize_placement(&self, request: &AiDesignRequest) -> Result<Value, ApiError> {
        self.post(endpoints::AI_OPTIMIZE_PLACEMENT, request, None)
            .await
    }

    async fn color_scheme(&self, request: &AiDesignRequest) -> Result<Value, ApiError> {
        self.post(endpoints::AI_COLOR_SCHEME, request, None).await
    }

    async fn suggestions(&self, request: &AiDesignRequest) -> Result<Value, ApiError> {
        self.post(endpoints::AI_SUGGESTIONS, request, None).await
    }
}
