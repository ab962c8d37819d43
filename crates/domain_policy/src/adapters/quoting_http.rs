//! HTTP client for the quoting service
//!
//! Fetches `GET {base_url}/{quotation_id}` and maps the response:
//!
//! | Response | Result |
//! |---|---|
//! | 2xx with a quotation body | `Ok(Some(snapshot))` |
//! | 2xx with an empty or `null` body | `Ok(None)` |
//! | 404 | `Ok(None)` |
//! | 5xx | `PortError::ServiceUnavailable` |
//! | other status | `PortError::Internal` |
//! | timeout | `PortError::Timeout` |
//! | transport failure | `PortError::Connection` |
//! | undecodable body | `PortError::Transformation` |
//!
//! Every call is attempted once; there are no retries. Health checks hit
//! the service's own `/health` endpoint at the root of the base URL's host.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, instrument, warn};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, QuotationId,
};

use crate::ports::QuotationLookupClient;
use crate::quotation::QuotationSnapshot;

const SERVICE_NAME: &str = "quoting-service";

/// Configuration for [`HttpQuotationLookupClient`]
#[derive(Debug, Clone)]
pub struct QuotingClientConfig {
    /// Collection URL of the quoting service, e.g. `http://localhost:8081/quotations`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl QuotingClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Quotation lookup over HTTP
#[derive(Debug, Clone)]
pub struct HttpQuotationLookupClient {
    base_url: Url,
    health_url: Url,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl HttpQuotationLookupClient {
    /// Creates a client; fails on an unparsable base URL
    pub fn new(config: QuotingClientConfig) -> Result<Self, PortError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| PortError::Validation {
            message: format!("Invalid quoting service URL '{}': {}", config.base_url, e),
            field: Some("quoting_service_url".to_string()),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PortError::validation(format!(
                "Quoting service URL '{}' cannot be used as a base",
                config.base_url
            )));
        }

        let health_url = base_url.join("/health").map_err(|e| {
            PortError::validation(format!(
                "Quoting service URL '{}' has no health endpoint: {}",
                config.base_url, e
            ))
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PortError::Internal {
                message: "Failed to create HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            base_url,
            health_url,
            timeout: config.timeout,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    /// URL of a single quotation; the id is percent-encoded as one path segment
    pub fn quotation_url(&self, id: &QuotationId) -> Result<Url, PortError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PortError::internal("Quoting service URL cannot be a base"))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    fn map_transport_error(&self, operation: &str, error: reqwest::Error) -> PortError {
        if error.is_timeout() {
            PortError::Timeout {
                operation: operation.to_string(),
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            PortError::connection_with_source(
                format!("Failed to reach {}", SERVICE_NAME),
                error,
            )
        }
    }
}

impl DomainPort for HttpQuotationLookupClient {}

#[async_trait]
impl QuotationLookupClient for HttpQuotationLookupClient {
    #[instrument(skip(self), fields(quotation_id = %id))]
    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<QuotationSnapshot>, PortError> {
        let url = self.quotation_url(id)?;
        debug!(%url, "Fetching quotation");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_transport_error("find_quotation", e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Quoting service returned 404");
            return Ok(None);
        }
        if status.is_server_error() {
            warn!(%status, "Quoting service failed");
            return Err(PortError::ServiceUnavailable {
                service: format!("{} returned {}", SERVICE_NAME, status),
            });
        }
        if !status.is_success() {
            warn!(%status, "Unexpected status from quoting service");
            return Err(PortError::internal(format!(
                "{} returned {}",
                SERVICE_NAME, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error("read_quotation", e))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            debug!("Quoting service returned an empty body");
            return Ok(None);
        }

        serde_json::from_slice::<Option<QuotationSnapshot>>(&body).map_err(|e| {
            PortError::transformation(format!("Invalid quotation payload: {}", e))
        })
    }
}

#[async_trait]
impl HealthCheckable for HttpQuotationLookupClient {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let outcome = self.http_client.get(self.health_url.clone()).send().await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let (status, message) = match outcome {
            Ok(response) if response.status().is_success() => (AdapterHealth::Healthy, None),
            Ok(response) => (
                AdapterHealth::Degraded,
                Some(format!("{} returned {}", SERVICE_NAME, response.status())),
            ),
            Err(e) => (AdapterHealth::Unhealthy, Some(e.to_string())),
        };

        HealthCheckResult {
            adapter_id: SERVICE_NAME.to_string(),
            status,
            latency_ms,
            message,
            checked_at: chrono::Utc::now(),
        }
    }
}
