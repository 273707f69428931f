//! Trait definitions for generation backends and pipeline collaborators.

use async_trait::async_trait;
use easel_core::{
    ContentPart, ContentRequest, ContentResponse, GenerationConfig, ImageRef, ImageRequest,
    ImageResponse, ResponseModality, Slide, VideoOperation, VideoRequest,
};
use easel_error::EaselResult;
use std::path::PathBuf;

/// Core trait that all generation backends must implement.
///
/// Provides text (and multimodal) content generation; image and video
/// capabilities are exposed through the optional traits below.
#[async_trait]
pub trait EaselDriver: Send + Sync {
    /// Generate content for a request.
    async fn generate_content(&self, req: &ContentRequest) -> EaselResult<ContentResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Backends that can produce images from a text prompt.
#[async_trait]
pub trait ImageGeneration: EaselDriver {
    /// Generate one or more images.
    async fn generate_images(&self, req: &ImageRequest) -> EaselResult<ImageResponse>;
}

/// Backends that can rewrite an existing image from an instruction.
///
/// The default implementation sends the image and instruction as a
/// two-part content request restricted to image output.
#[async_trait]
pub trait ImageEditing: EaselDriver {
    /// Apply `instruction` to `image` with `model`, returning the response.
    async fn edit_image(
        &self,
        model: &str,
        image: &ImageRef,
        instruction: &str,
    ) -> EaselResult<ContentResponse> {
        let req = ContentRequest {
            model: model.to_string(),
            parts: vec![
                ContentPart::InlineImage(image.clone()),
                ContentPart::Text(instruction.to_string()),
            ],
            config: GenerationConfig {
                response_modalities: vec![ResponseModality::Image],
                ..Default::default()
            },
        };
        self.generate_content(&req).await
    }
}

/// Backends that can run long-running video generation jobs.
#[async_trait]
pub trait VideoGeneration: EaselDriver {
    /// Start a video generation job.
    async fn start_video(&self, req: &VideoRequest) -> EaselResult<VideoOperation>;

    /// Refresh the status of a running job.
    async fn poll_video(&self, operation: &VideoOperation) -> EaselResult<VideoOperation>;

    /// Download a finished video.
    async fn download_video(&self, uri: &str) -> EaselResult<Vec<u8>>;
}

/// Credential selection collaborator.
///
/// The pipeline never selects keys itself; it reports credential failures so
/// the caller can run this flow again.
#[async_trait]
pub trait CredentialSelector: Send + Sync {
    /// Whether a key is currently selected.
    async fn has_selected_api_key(&self) -> bool;

    /// Run the key selection flow.
    async fn open_select_key(&self) -> EaselResult<()>;
}

/// What an exporter produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Primary output file
    pub path: PathBuf,
    /// Number of slides written
    pub slide_count: usize,
}

/// Presentation export collaborator.
///
/// Receives the complete, order-stable slide sequence and writes one
/// slide-equivalent per slide.
pub trait PresentationExporter {
    /// Write the presentation.
    fn export(&self, slides: &[Slide]) -> EaselResult<ExportArtifact>;
}
