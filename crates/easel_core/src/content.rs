//! Provider-neutral content generation requests and responses.

use crate::ImageRef;
use serde::{Deserialize, Serialize};

/// One part of a multi-part prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ContentPart {
    /// Plain text
    Text(String),
    /// Inline image bytes
    InlineImage(ImageRef),
}

/// Output modality a request may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ResponseModality {
    /// Text output
    Text,
    /// Image output
    Image,
}

/// Server-side tool a request may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Retrieval grounding through web search
    GoogleSearch,
}

/// Generation options understood by the remote service.
///
/// Extended reasoning and search grounding are mutually exclusive; the
/// outline planner never sets both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// MIME type of the requested output (`application/json` for structured output)
    pub response_mime_type: Option<String>,
    /// JSON schema the output must follow
    pub response_schema: Option<serde_json::Value>,
    /// Extended reasoning token budget
    pub thinking_budget: Option<u32>,
    /// Enabled tools
    pub tools: Vec<Tool>,
    /// Allowed output modalities (empty means provider default)
    pub response_modalities: Vec<ResponseModality>,
}

/// A content generation request.
///
/// # Examples
///
/// ```
/// use easel_core::{ContentPart, ContentRequest, GenerationConfig};
///
/// let request = ContentRequest {
///     model: "gemini-2.5-flash".to_string(),
///     parts: vec![ContentPart::Text("Hello".to_string())],
///     config: GenerationConfig::default(),
/// };
/// assert_eq!(request.prompt_text(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentRequest {
    /// Model identifier
    pub model: String,
    /// Prompt parts, in order
    pub parts: Vec<ContentPart>,
    /// Generation options
    pub config: GenerationConfig,
}

impl ContentRequest {
    /// Concatenated text parts.
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text(text) => Some(text.as_str()),
                ContentPart::InlineImage(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Link and title of a citation, as the service reports it.
///
/// Either field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CitationRef {
    /// Cited link
    #[serde(default)]
    pub uri: Option<String>,
    /// Cited title
    #[serde(default)]
    pub title: Option<String>,
}

/// A raw citation record from retrieval grounding.
///
/// Records come in several shapes; each carries at most a web citation or a
/// map citation. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Web page citation
    #[serde(default)]
    pub web: Option<CitationRef>,
    /// Map place citation
    #[serde(default)]
    pub maps: Option<CitationRef>,
}

/// A content generation response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentResponse {
    /// Concatenated text of the first candidate
    pub text: String,
    /// Inline images of the first candidate, in order
    pub images: Vec<ImageRef>,
    /// Grounding citations, when retrieval was enabled
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}
