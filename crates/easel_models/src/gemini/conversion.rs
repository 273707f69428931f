//! Conversions between Easel request types and Gemini wire types.

use super::dto::{
    ApiErrorEnvelope, Content, EncodedImage, GenerateContentRequest, GenerateContentResponse,
    GenerationConfigDto, GoogleSearch, ImageParameters, InlineData, Instance, Operation,
    OutputOptions, PartDto, PredictRequest, PredictResponse, ThinkingConfig, ToolDto,
    VideoParameters,
};
use easel_core::{
    ContentPart, ContentRequest, ContentResponse, GenerationConfig, ImageRef, ImageRequest,
    ImageResponse, Tool, VideoOperation, VideoRequest,
};
use easel_error::{EaselResult, GeminiError, GeminiErrorKind};

/// Build a `generateContent` body.
pub fn to_generate_content_request(req: &ContentRequest) -> GenerateContentRequest {
    let parts = req
        .parts
        .iter()
        .map(|part| match part {
            ContentPart::Text(text) => PartDto {
                text: Some(text.clone()),
                ..Default::default()
            },
            ContentPart::InlineImage(image) => PartDto {
                inline_data: Some(InlineData {
                    mime_type: image.mime_type().to_string(),
                    data: image.data().to_string(),
                }),
                ..Default::default()
            },
        })
        .collect();

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: to_generation_config(&req.config),
        tools: req
            .config
            .tools
            .iter()
            .map(|tool| match tool {
                Tool::GoogleSearch => ToolDto {
                    google_search: Some(GoogleSearch {}),
                },
            })
            .collect(),
    }
}

fn to_generation_config(config: &GenerationConfig) -> Option<GenerationConfigDto> {
    let dto = GenerationConfigDto {
        response_mime_type: config.response_mime_type.clone(),
        response_schema: config.response_schema.clone(),
        thinking_config: config
            .thinking_budget
            .map(|thinking_budget| ThinkingConfig { thinking_budget }),
        response_modalities: config
            .response_modalities
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    let is_empty = dto.response_mime_type.is_none()
        && dto.response_schema.is_none()
        && dto.thinking_config.is_none()
        && dto.response_modalities.is_empty();

    (!is_empty).then_some(dto)
}

/// Flatten the first candidate of a `generateContent` response.
///
/// Reasoning summary parts are skipped.
///
/// # Errors
///
/// Returns `EmptyResponse` if the service returned no candidate, naming the
/// block reason when the prompt was rejected.
pub fn from_generate_content_response(
    response: GenerateContentResponse,
) -> EaselResult<ContentResponse> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!("The model returned no candidates (blocked: {})", reason))
            .unwrap_or_else(|| "The model returned no candidates".to_string());
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse(reason)).into());
    };

    let mut text = String::new();
    let mut images = Vec::new();

    for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
        if part.thought.unwrap_or(false) {
            continue;
        }
        if let Some(chunk) = part.text {
            text.push_str(&chunk);
        }
        if let Some(inline) = part.inline_data {
            images.push(ImageRef::new(inline.mime_type, inline.data));
        }
    }

    Ok(ContentResponse {
        text,
        images,
        grounding_chunks: candidate
            .grounding_metadata
            .and_then(|metadata| metadata.grounding_chunks),
    })
}

/// Build an Imagen `predict` body.
pub fn to_image_request(req: &ImageRequest) -> PredictRequest<ImageParameters> {
    PredictRequest {
        instances: vec![Instance {
            prompt: req.prompt.clone(),
            image: None,
        }],
        parameters: ImageParameters {
            sample_count: req.number_of_images,
            aspect_ratio: req.aspect_ratio.to_string(),
            output_options: OutputOptions {
                mime_type: req.output_mime_type.clone(),
            },
        },
    }
}

/// Collect Imagen predictions.
///
/// Predictions without a declared MIME type take the requested output type.
pub fn from_image_response(response: PredictResponse, requested_mime: &str) -> ImageResponse {
    ImageResponse {
        images: response
            .predictions
            .into_iter()
            .filter(|p| !p.bytes_base64_encoded.is_empty())
            .map(|p| {
                let mime = p.mime_type.unwrap_or_else(|| requested_mime.to_string());
                ImageRef::new(mime, p.bytes_base64_encoded)
            })
            .collect(),
    }
}

/// Build a Veo `predictLongRunning` body.
pub fn to_video_request(req: &VideoRequest) -> PredictRequest<VideoParameters> {
    PredictRequest {
        instances: vec![Instance {
            prompt: req.prompt.clone(),
            image: req.image.as_ref().map(|image| EncodedImage {
                bytes_base64_encoded: image.data().to_string(),
                mime_type: Some(image.mime_type().to_string()),
            }),
        }],
        parameters: VideoParameters {
            sample_count: req.number_of_videos,
            aspect_ratio: req.aspect_ratio.to_string(),
            resolution: req.resolution.clone(),
        },
    }
}

/// Convert an operation resource.
///
/// # Errors
///
/// A finished operation that carries an error becomes an `ApiRequest` error
/// with the service's message.
pub fn from_operation(operation: Operation) -> EaselResult<VideoOperation> {
    if let Some(error) = operation.error {
        let message = error
            .message
            .unwrap_or_else(|| "video operation failed".to_string());
        return Err(GeminiError::new(GeminiErrorKind::ApiRequest(message)).into());
    }

    let video_uris = operation
        .response
        .and_then(|r| r.generate_video_response)
        .map(|r| r.generated_samples)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|sample| sample.video.and_then(|video| video.uri))
        .collect();

    Ok(VideoOperation {
        name: operation.name,
        done: operation.done,
        video_uris,
    })
}

/// Extract the message from an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::{AspectRatio, ResponseModality, VideoAspectRatio};

    #[test]
    fn search_request_carries_tool_and_no_config() {
        let req = ContentRequest {
            model: "gemini-2.5-flash".to_string(),
            parts: vec![ContentPart::Text("topic".to_string())],
            config: GenerationConfig {
                tools: vec![Tool::GoogleSearch],
                ..Default::default()
            },
        };

        let body = serde_json::to_value(to_generate_content_request(&req)).unwrap();
        assert_eq!(body["tools"][0]["googleSearch"], serde_json::json!({}));
        assert!(body.get("generationConfig").is_none());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "topic");
    }

    #[test]
    fn json_request_carries_schema_and_budget() {
        let req = ContentRequest {
            model: "gemini-2.5-pro".to_string(),
            parts: vec![ContentPart::Text("topic".to_string())],
            config: GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(serde_json::json!({"type": "ARRAY"})),
                thinking_budget: Some(32768),
                ..Default::default()
            },
        };

        let body = serde_json::to_value(to_generate_content_request(&req)).unwrap();
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "ARRAY");
        assert_eq!(config["thinkingConfig"]["thinkingBudget"], 32768);
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn edit_request_sends_image_then_text() {
        let req = ContentRequest {
            model: "gemini-2.5-flash-image".to_string(),
            parts: vec![
                ContentPart::InlineImage(ImageRef::new("image/png", "AAAA")),
                ContentPart::Text("make it blue".to_string()),
            ],
            config: GenerationConfig {
                response_modalities: vec![ResponseModality::Image],
                ..Default::default()
            },
        };

        let body = serde_json::to_value(to_generate_content_request(&req)).unwrap();
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["text"], "make it blue");
        assert_eq!(
            body["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE"])
        );
    }

    #[test]
    fn response_concatenates_text_and_collects_citations() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {"parts": [
                    {"text": "thinking...", "thought": true},
                    {"text": "---SLIDE---\n"},
                    {"text": "TITLE: A"}
                ]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://a.example", "title": "A"}},
                    {"maps": {"uri": "https://maps.example", "title": "Place", "placeId": "x"}}
                ]}
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let converted = from_generate_content_response(response).unwrap();

        assert_eq!(converted.text, "---SLIDE---\nTITLE: A");
        let chunks = converted.grounding_chunks.unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(
            chunks[1].maps.as_ref().and_then(|m| m.title.as_deref()),
            Some("Place")
        );
    }

    #[test]
    fn response_without_candidates_reports_block_reason() {
        let raw = serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}});
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let err = from_generate_content_response(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn image_predictions_fall_back_to_requested_mime() {
        let raw = serde_json::json!({"predictions": [
            {"bytesBase64Encoded": "AAAA"},
            {"bytesBase64Encoded": "BBBB", "mimeType": "image/png"}
        ]});
        let response: PredictResponse = serde_json::from_value(raw).unwrap();
        let images = from_image_response(response, "image/jpeg").images;

        assert_eq!(images[0].mime_type(), "image/jpeg");
        assert_eq!(images[1].mime_type(), "image/png");
    }

    #[test]
    fn image_request_uses_service_parameter_names() {
        let req = ImageRequest {
            model: "imagen".to_string(),
            prompt: "a fox".to_string(),
            number_of_images: 1,
            output_mime_type: "image/jpeg".to_string(),
            aspect_ratio: AspectRatio::Widescreen,
        };
        let body = serde_json::to_value(to_image_request(&req)).unwrap();
        assert_eq!(body["instances"][0]["prompt"], "a fox");
        assert_eq!(body["parameters"]["sampleCount"], 1);
        assert_eq!(body["parameters"]["aspectRatio"], "16:9");
        assert_eq!(body["parameters"]["outputOptions"]["mimeType"], "image/jpeg");
    }

    #[test]
    fn video_request_includes_seed_image() {
        let req = VideoRequest {
            model: "veo".to_string(),
            prompt: "waves".to_string(),
            number_of_videos: 1,
            resolution: "720p".to_string(),
            aspect_ratio: VideoAspectRatio::Portrait,
            image: Some(ImageRef::new("image/png", "AAAA")),
        };
        let body = serde_json::to_value(to_video_request(&req)).unwrap();
        assert_eq!(body["instances"][0]["image"]["bytesBase64Encoded"], "AAAA");
        assert_eq!(body["parameters"]["aspectRatio"], "9:16");
        assert_eq!(body["parameters"]["resolution"], "720p");
    }

    #[test]
    fn finished_operation_exposes_download_links() {
        let raw = serde_json::json!({
            "name": "models/veo/operations/1",
            "done": true,
            "response": {"generateVideoResponse": {"generatedSamples": [
                {"video": {"uri": "https://files.example/v1?alt=media"}}
            ]}}
        });
        let operation: Operation = serde_json::from_value(raw).unwrap();
        let converted = from_operation(operation).unwrap();

        assert!(converted.done);
        assert_eq!(
            converted.first_video_uri(),
            Some("https://files.example/v1?alt=media")
        );
    }

    #[test]
    fn running_operation_has_no_links() {
        let raw = serde_json::json!({"name": "models/veo/operations/1"});
        let operation: Operation = serde_json::from_value(raw).unwrap();
        let converted = from_operation(operation).unwrap();
        assert!(!converted.done);
        assert!(converted.video_uris.is_empty());
    }

    #[test]
    fn error_message_prefers_structured_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(body),
            "API key not valid. Please pass a valid API key."
        );
        assert_eq!(error_message("plain failure"), "plain failure");
    }
}
