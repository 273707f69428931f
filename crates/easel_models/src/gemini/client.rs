//! Gemini REST client.

use super::conversion;
use super::dto::{GenerateContentResponse, Operation, PredictResponse};
use crate::StudioMetrics;
use async_trait::async_trait;
use easel_core::{
    ContentRequest, ContentResponse, ImageRequest, ImageResponse, VideoOperation, VideoRequest,
};
use easel_error::{EaselResult, GeminiError, GeminiErrorKind, HttpError, JsonError};
use easel_interface::{EaselDriver, ImageEditing, ImageGeneration, VideoGeneration};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Default Generative Language API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini text, Imagen, and Veo endpoints.
///
/// Every call is a single attempt. Failures are returned to the caller with
/// the service's message intact so credential problems can be recognized.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with the API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if neither `GEMINI_API_KEY` nor `API_KEY` is
    /// set to a non-empty value.
    #[instrument(skip_all)]
    pub fn new() -> EaselResult<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Self::with_api_key(api_key)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns `ClientCreation` if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn with_api_key(api_key: impl Into<String>) -> EaselResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// API root in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, body), fields(url = %url))]
    async fn post_json<B, R>(&self, url: &str, body: &B) -> EaselResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!("Sending Gemini API request");
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        Self::read_json(response).await
    }

    #[instrument(skip(self), fields(url = %url))]
    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> EaselResult<R> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        Self::read_json(response).await
    }

    async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> EaselResult<R> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::new(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = conversion::error_message(&body);
            warn!(status = status.as_u16(), message = %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        serde_json::from_str(&body).map_err(|e| {
            JsonError::new(format!("Failed to parse Gemini response: {}", e)).into()
        })
    }

    async fn download(&self, uri: &str) -> EaselResult<Vec<u8>> {
        let response = self
            .client
            .get(uri)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Download(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: conversion::error_message(&body),
            })
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Download(e.to_string())))?;
        Ok(bytes.to_vec())
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    fn operation_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.trim_start_matches('/'))
    }
}

/// Record duration and outcome of one call.
fn record_outcome<T>(operation: &str, model: &str, start: Instant, result: &EaselResult<T>) {
    let metrics = StudioMetrics::get();
    match result {
        Ok(_) => metrics.record_request(operation, model, start.elapsed().as_secs_f64()),
        Err(e) => metrics.record_error(operation, model, e.failure_kind()),
    }
}

#[async_trait]
impl EaselDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model))]
    async fn generate_content(&self, req: &ContentRequest) -> EaselResult<ContentResponse> {
        let body = conversion::to_generate_content_request(req);
        let url = self.model_url(&req.model, "generateContent");

        let start = Instant::now();
        let result = match self.post_json::<_, GenerateContentResponse>(&url, &body).await {
            Ok(response) => conversion::from_generate_content_response(response),
            Err(e) => Err(e),
        };
        record_outcome("generate_content", &req.model, start, &result);
        result
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[async_trait]
impl ImageGeneration for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model, aspect_ratio = %req.aspect_ratio))]
    async fn generate_images(&self, req: &ImageRequest) -> EaselResult<ImageResponse> {
        let body = conversion::to_image_request(req);
        let url = self.model_url(&req.model, "predict");

        let start = Instant::now();
        let result = self
            .post_json::<_, PredictResponse>(&url, &body)
            .await
            .map(|response| conversion::from_image_response(response, &req.output_mime_type));
        record_outcome("generate_images", &req.model, start, &result);
        result
    }
}

impl ImageEditing for GeminiClient {}

#[async_trait]
impl VideoGeneration for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model, resolution = %req.resolution))]
    async fn start_video(&self, req: &VideoRequest) -> EaselResult<VideoOperation> {
        let body = conversion::to_video_request(req);
        let url = self.model_url(&req.model, "predictLongRunning");

        let start = Instant::now();
        let result = match self.post_json::<_, Operation>(&url, &body).await {
            Ok(operation) => {
                debug!(operation = %operation.name, "Video job started");
                conversion::from_operation(operation)
            }
            Err(e) => Err(e),
        };
        record_outcome("start_video", &req.model, start, &result);
        result
    }

    #[instrument(skip(self), fields(operation = %operation.name))]
    async fn poll_video(&self, operation: &VideoOperation) -> EaselResult<VideoOperation> {
        let url = self.operation_url(&operation.name);

        let start = Instant::now();
        let result = match self.get_json::<Operation>(&url).await {
            Ok(operation) => conversion::from_operation(operation),
            Err(e) => Err(e),
        };
        record_outcome("poll_video", "veo", start, &result);
        result
    }

    #[instrument(skip(self, uri))]
    async fn download_video(&self, uri: &str) -> EaselResult<Vec<u8>> {
        let start = Instant::now();
        let result = self.download(uri).await;
        if let Ok(bytes) = &result {
            debug!(bytes = bytes.len(), "Video downloaded");
        }
        record_outcome("download_video", "veo", start, &result);
        result
    }
}
