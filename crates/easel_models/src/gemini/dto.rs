//! Gemini REST API data transfer objects.

use serde::{Deserialize, Serialize};

//
// ─── GENERATE CONTENT ───────────────────────────────────────────────────────────
//

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,
    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfigDto>,
    /// Enabled tools
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDto>,
}

/// A conversation turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Turn author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Turn parts
    #[serde(default)]
    pub parts: Vec<PartDto>,
}

/// One part of a turn: text or inline media.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartDto {
    /// Text part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline media part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    /// Set on reasoning summaries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Base64 inline payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64 data
    pub data: String,
}

/// `generationConfig` object.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfigDto {
    /// Output MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Output schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Reasoning options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
    /// Restricts output modalities
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_modalities: Vec<String>,
}

/// `thinkingConfig` object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Reasoning token budget
    pub thinking_budget: u32,
}

/// Tool declaration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDto {
    /// Search grounding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

/// Empty search grounding options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleSearch {}

/// `generateContent` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Why the prompt was rejected, if it was
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content
    #[serde(default)]
    pub content: Option<Content>,
    /// Retrieval citations
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Grounding metadata of a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Raw citation records
    #[serde(default)]
    pub grounding_chunks: Option<Vec<easel_core::GroundingChunk>>,
}

/// Prompt rejection details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason
    #[serde(default)]
    pub block_reason: Option<String>,
}

//
// ─── PREDICT (IMAGEN / VEO) ──────────────────────────────────────────────────────
//

/// `predict` / `predictLongRunning` request body.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<P: Serialize> {
    /// Prompt instances
    pub instances: Vec<Instance>,
    /// Model parameters
    pub parameters: P,
}

/// A prompt instance.
#[derive(Debug, Clone, Serialize)]
pub struct Instance {
    /// Text prompt
    pub prompt: String,
    /// Optional seed image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EncodedImage>,
}

/// Image payload in predict requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    /// Base64 data
    pub bytes_base64_encoded: String,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Imagen parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageParameters {
    /// Number of images
    pub sample_count: u32,
    /// Aspect ratio, e.g. `16:9`
    pub aspect_ratio: String,
    /// Output encoding
    pub output_options: OutputOptions,
}

/// Imagen output encoding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Output MIME type
    pub mime_type: String,
}

/// Imagen `predict` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    /// Generated images
    #[serde(default)]
    pub predictions: Vec<EncodedImage>,
}

/// Veo parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    /// Number of videos
    pub sample_count: u32,
    /// Aspect ratio, `16:9` or `9:16`
    pub aspect_ratio: String,
    /// Resolution, e.g. `720p`
    pub resolution: String,
}

/// Long-running operation resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Resource name used for polling
    pub name: String,
    /// Completion flag (absent while running)
    #[serde(default)]
    pub done: bool,
    /// Operation result
    #[serde(default)]
    pub response: Option<OperationResponse>,
    /// Operation failure
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// Result payload of a finished video operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    /// Veo result
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Veo result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    /// Generated samples
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

/// One generated video.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedSample {
    /// Downloadable file reference
    #[serde(default)]
    pub video: Option<VideoFile>,
}

/// Downloadable file reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoFile {
    /// Download link
    #[serde(default)]
    pub uri: Option<String>,
}

//
// ─── ERRORS ─────────────────────────────────────────────────────────────────────
//

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error details
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// Error details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Numeric code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Canonical status, e.g. `INVALID_ARGUMENT`
    #[serde(default)]
    pub status: Option<String>,
}
