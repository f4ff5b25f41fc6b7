// src/core/service_client.rs
//! HTTP client for the remote analysis service

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, trace};

use crate::core::config_manager::{ClientConfig, SentimentField};
use crate::error::AnalysisError;
use crate::types::{AnalysisRequest, ResumeScreeningRequest, SentimentRequest};

const SCREENING_ENDPOINT: &str = "/screening";
const SENTIMENT_ENDPOINT: &str = "/sentiment";

/// Anything that can carry a request to the analysis service and hand back
/// the raw JSON reply. Controllers hold one of these; tests swap in doubles.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn dispatch(&self, request: &AnalysisRequest) -> Result<Value, AnalysisError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    sentiment_field: SentimentField,
    timeout_seconds: u64,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ClientConfig) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AnalysisError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            sentiment_field: config.sentiment_field,
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Resume screening - sends the document and job description as multipart
    pub async fn screen_resume(
        &self,
        request: &ResumeScreeningRequest,
    ) -> Result<Value, AnalysisError> {
        let url = format!("{}{}", self.base_url, SCREENING_ENDPOINT);
        let document = &request.document;

        let file_part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.media_type)
            .map_err(|e| {
                AnalysisError::Validation(format!(
                    "Invalid media type '{}': {}",
                    document.media_type, e
                ))
            })?;

        let form = Form::new()
            .part("file", file_part)
            .text("text", request.job_description.clone());

        info!(
            "Calling screening service: {} ({}, {} bytes)",
            url,
            document.file_name,
            document.bytes.len()
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.send_error(&url, e))?;

        Self::read_json(response).await
    }

    /// Sentiment analysis - sends the feedback as a single-field JSON body
    pub async fn analyze_sentiment(
        &self,
        request: &SentimentRequest,
    ) -> Result<Value, AnalysisError> {
        let url = format!("{}{}", self.base_url, SENTIMENT_ENDPOINT);

        let mut payload = serde_json::Map::new();
        payload.insert(
            self.sentiment_field.as_str().to_string(),
            Value::String(request.feedback.clone()),
        );

        info!("Calling sentiment service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.send_error(&url, e))?;

        Self::read_json(response).await
    }

    fn send_error(&self, url: &str, e: reqwest::Error) -> AnalysisError {
        let cause = if e.is_timeout() {
            format!("Request to {} timed out after {}s", url, self.timeout_seconds)
        } else {
            format!("HTTP request to {} failed: {}", url, e)
        };
        error!("{}", cause);
        AnalysisError::Transport {
            status: e.status().map(|s| s.as_u16()),
            detail: None,
            cause,
        }
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, AnalysisError> {
        let status = response.status();
        trace!("Response status: {}", status);

        let response_text = response.text().await.map_err(|e| AnalysisError::Transport {
            status: Some(status.as_u16()),
            detail: None,
            cause: format!("Failed to read response body: {}", e),
        })?;

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                error!("Analysis service returned non-JSON body: {}", response_text);
                AnalysisError::ShapeMismatch(format!("Response body is not JSON: {}", e))
            })
        } else {
            error!("Analysis service error response {}: {}", status, response_text);
            Err(AnalysisError::Transport {
                status: Some(status.as_u16()),
                detail: Self::extract_detail(&response_text),
                cause: format!("Service returned error status {}", status),
            })
        }
    }

    /// Pull a human-readable `detail` string out of an error body, if any
    fn extract_detail(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| d.as_str().map(str::to_string))
            .filter(|d| !d.trim().is_empty())
    }
}

#[async_trait]
impl AnalysisService for ServiceClient {
    async fn dispatch(&self, request: &AnalysisRequest) -> Result<Value, AnalysisError> {
        match request {
            AnalysisRequest::Screening(screening) => self.screen_resume(screening).await,
            AnalysisRequest::Sentiment(sentiment) => self.analyze_sentiment(sentiment).await,
        }
    }
}
