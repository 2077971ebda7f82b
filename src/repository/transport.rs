//! HTTP transport shared by every request against one repository
//!
//! Retries server errors (5xx) and connect/timeout failures with exponential
//! backoff. Once the retry budget is spent a 5xx response is returned to the
//! caller as-is so status-based decisions stay with the caller.

use std::time::Duration;

use reqwest::{Client, Method, Response};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::repository::error::{ConfigError, RepositoryError};

/// Exponential backoff settings
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Delay to wait before retry number `attempt + 1`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let secs = self.initial_delay.as_secs_f64() * self.multiplier.powi(attempt as i32);
        Duration::try_from_secs_f64(secs)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

impl From<&HttpConfig> for RetryPolicy {
    fn from(config: &HttpConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_delay: Duration::from_millis(config.initial_retry_delay_ms),
            multiplier: config.retry_multiplier,
            max_delay: Duration::from_millis(config.max_retry_delay_ms),
        }
    }
}

/// reqwest client plus retry policy; cheap to clone and safe to share between tasks
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    retry: RetryPolicy,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            retry: RetryPolicy::from(config),
        })
    }

    pub async fn get(&self, url: &str) -> Result<Response, RepositoryError> {
        self.send(Method::GET, url).await
    }

    pub async fn head(&self, url: &str) -> Result<Response, RepositoryError> {
        self.send(Method::HEAD, url).await
    }

    async fn send(&self, method: Method, url: &str) -> Result<Response, RepositoryError> {
        let mut attempt = 0;

        loop {
            debug!("{} {}", method, url);
            let result = self.client.request(method.clone(), url).send().await;

            let retryable = match &result {
                Ok(response) => response.status().is_server_error(),
                Err(e) => is_transient(e),
            };

            if !retryable || attempt >= self.retry.max_retries {
                return Ok(result?);
            }

            let delay = self.retry.delay_for(attempt);
            match &result {
                Ok(response) => warn!(
                    "{} {} returned {}, retry {} after {:?}",
                    method,
                    url,
                    response.status(),
                    attempt + 1,
                    delay
                ),
                Err(e) => warn!(
                    "{} {} failed: {}, retry {} after {:?}",
                    method,
                    url,
                    e,
                    attempt + 1,
                    delay
                ),
            }

            sleep(delay).await;
            attempt += 1;
        }
    }
}

fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout()
}
