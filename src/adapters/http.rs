//! HTTP predictor adapter: reqwest client with timeout, bounded retry and
//! exponential backoff.
//!
//! Client errors (4xx) fail fast; server errors and transport failures are
//! retried up to the configured limit.

use std::time::Duration;

use crate::ports::{Prediction, Predictor, PredictorRequest};

/// Errors from the prediction service boundary.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response decoding failed: {reason}")]
    Decode { reason: String },
}

/// Configuration for the HTTP predictor.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(5),
        }
    }
}

impl PredictorConfig {
    /// Build a configuration from `VITALAGE_*` environment variables,
    /// falling back to defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("VITALAGE_PREDICTOR_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            timeout: std::env::var("VITALAGE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&v| v > 0)
                .map_or(defaults.timeout, Duration::from_secs),
            max_retries: std::env::var("VITALAGE_HTTP_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(defaults.max_retries),
            initial_backoff: defaults.initial_backoff,
            max_backoff: defaults.max_backoff,
        }
    }
}

/// Blocking HTTP client for the prediction service.
pub struct HttpPredictor {
    config: PredictorConfig,
    client: reqwest::blocking::Client,
}

impl HttpPredictor {
    /// Create a predictor client.
    ///
    /// # Errors
    /// Returns `PredictorError::Transport` if the underlying client cannot
    /// be constructed.
    pub fn new(config: PredictorConfig) -> Result<Self, PredictorError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PredictorError::Transport {
                reason: e.to_string(),
            })?;

        Ok(Self { config, client })
    }

    /// POST a request with retry and backoff.
    fn post(&self, path: &str, request: &PredictorRequest) -> Result<Prediction, PredictorError> {
        let url = format!("{}{}", self.config.base_url, path);

        let mut backoff = self.config.initial_backoff;
        let mut last_err = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "predictor: retry attempt {}/{} after {:?}",
                    attempt,
                    self.config.max_retries,
                    backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            match self.client.post(&url).json(request).send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<Prediction>().map_err(|e| {
                            PredictorError::Decode {
                                reason: e.to_string(),
                            }
                        });
                    }
                    if status.is_client_error() {
                        let body = response.text().unwrap_or_default();
                        return Err(PredictorError::Status {
                            status: status.as_u16(),
                            body,
                        });
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }
        }

        Err(PredictorError::Transport {
            reason: format!(
                "all {} retries exhausted: {last_err}",
                self.config.max_retries
            ),
        })
    }
}

impl Predictor for HttpPredictor {
    type Error = PredictorError;

    fn predict(&self, request: &PredictorRequest) -> Result<Prediction, PredictorError> {
        self.post("/predict", request)
    }

    fn simulate(&self, request: &PredictorRequest) -> Result<Prediction, PredictorError> {
        self.post("/simulate", request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PredictorConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = PredictorError::Status {
            status: 422,
            body: "Validation Error".to_string(),
        };
        assert!(err.to_string().contains("422"));

        let err = PredictorError::Transport {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_client_construction() {
        let predictor = HttpPredictor::new(PredictorConfig::default());
        assert!(predictor.is_ok());
    }
}
