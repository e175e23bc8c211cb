//! HTTP source for downloading the vehicle CSV.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tokio::time::sleep;
use tracing::{debug, warn};

use voltdash_core::HttpConfig;
use voltdash_core::error::AppError;
use voltdash_core::traits::VehicleSource;

/// Downloads the dataset over HTTP(S).
///
/// Transient failures (timeouts, connection errors, 5xx) are retried with
/// linear backoff; 429 responses are retried with capped exponential backoff,
/// honoring `Retry-After` when present.
///
/// # Examples
///
/// ```no_run
/// use voltdash_client::HttpCsvSource;
/// use voltdash_core::VehicleSource;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let source = HttpCsvSource::new("https://example.org/Electric_Vehicle_Population_Data.csv")?;
/// let csv = source.fetch_csv().await?;
/// println!("Downloaded {} bytes", csv.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpCsvSource {
    client: Client,
    url: Url,
    config: HttpConfig,
}

impl HttpCsvSource {
    /// Maximum backoff delay for rate-limited retries, including `Retry-After`.
    const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

    /// Maximum retries for rate-limited (429) responses.
    const RATE_LIMIT_MAX_RETRIES: u32 = 5;

    /// Creates a source with the default [`HttpConfig`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidUrl` if the URL is malformed or not http(s).
    /// Returns `AppError::ClientError` if the HTTP client cannot be built.
    pub fn new(url: &str) -> Result<Self, AppError> {
        Self::with_config(url, HttpConfig::default())
    }

    pub fn with_config(url: &str, config: HttpConfig) -> Result<Self, AppError> {
        let parsed = Url::parse(url).map_err(|_| AppError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::InvalidUrl(url.to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("Voltdash/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            url: parsed,
            config,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Delay before retrying a 429: `Retry-After` seconds when present,
    /// exponential backoff otherwise, never above [`Self::MAX_RETRY_DELAY`].
    fn rate_limit_delay(retry_after: Option<&str>, base_delay: Duration, attempt: u32) -> Duration {
        retry_after
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| base_delay.saturating_mul(2_u32.saturating_pow(attempt)))
            .min(Self::MAX_RETRY_DELAY)
    }

    async fn request_with_retry(&self) -> Result<reqwest::Response, AppError> {
        let max_retries = self.config.max_retries.max(1);
        let base_delay = self.config.retry_base_delay;
        let effective_max = Self::RATE_LIMIT_MAX_RETRIES.max(max_retries);
        let mut last_error = AppError::Generic("No attempts made".to_string());

        for attempt in 1..=effective_max {
            match self.client.get(self.url.clone()).send().await {
                Ok(resp) => {
                    let status = resp.status();

                    if status.is_success() {
                        return Ok(resp);
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        last_error = AppError::RateLimitExceeded;
                        if attempt < effective_max {
                            let retry_after = resp
                                .headers()
                                .get("retry-after")
                                .and_then(|v| v.to_str().ok());
                            let delay = Self::rate_limit_delay(retry_after, base_delay, attempt);
                            warn!(
                                "Rate limited by {} (attempt {}), retrying in {:?}",
                                self.url, attempt, delay
                            );
                            sleep(delay).await;
                            continue;
                        }
                        return Err(last_error);
                    }

                    if status.is_server_error() {
                        last_error = AppError::ClientError(format!(
                            "Server error: HTTP {}",
                            status.as_u16()
                        ));
                        if attempt < max_retries {
                            let delay = base_delay * attempt;
                            warn!(
                                "HTTP {} from {} (attempt {}), retrying in {:?}",
                                status.as_u16(),
                                self.url,
                                attempt,
                                delay
                            );
                            sleep(delay).await;
                            continue;
                        }
                        return Err(last_error);
                    }

                    return Err(AppError::ClientError(format!(
                        "HTTP {} from {}",
                        status.as_u16(),
                        self.url
                    )));
                }
                Err(e) => {
                    if e.is_timeout() {
                        last_error = AppError::Timeout(self.config.timeout.as_secs());
                    } else if e.is_connect() {
                        last_error = AppError::NetworkError(format!("Connection failed: {}", e));
                    } else {
                        last_error = AppError::ClientError(e.to_string());
                    }

                    if attempt < max_retries && (e.is_timeout() || e.is_connect()) {
                        let delay = base_delay * attempt;
                        warn!(
                            "Request to {} failed (attempt {}): {}; retrying in {:?}",
                            self.url, attempt, last_error, delay
                        );
                        sleep(delay).await;
                        continue;
                    }

                    return Err(last_error);
                }
            }
        }

        Err(last_error)
    }
}

impl VehicleSource for HttpCsvSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_csv(&self) -> Result<String, AppError> {
        let resp = self.request_with_retry().await?;
        let text = resp
            .text()
            .await
            .map_err(|e| AppError::ClientError(e.to_string()))?;
        debug!("Downloaded {} bytes from {}", text.len(), self.url);
        Ok(text)
    }
}
