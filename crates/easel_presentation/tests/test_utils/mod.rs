//! Test utilities for the presentation pipeline.
//!
//! Provides a scripted mock backend and outline fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use easel_core::{
    ContentRequest, ContentResponse, ImageRef, ImageRequest, ImageResponse, VideoOperation,
    VideoRequest,
};
use easel_error::{EaselError, EaselResult, GeminiError, GeminiErrorKind};
use easel_interface::{EaselDriver, ImageEditing, ImageGeneration, VideoGeneration};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Operation name returned by the mock video job.
pub const MOCK_OPERATION: &str = "models/mock-veo/operations/1";

/// Download link reported by the mock video job.
pub const MOCK_VIDEO_URI: &str = "https://files.example/mock-video?alt=media";

/// Bytes returned by the mock video download.
pub const MOCK_VIDEO_BYTES: &[u8] = b"mock-mp4";

/// Calls recorded by [`MockStudio`].
#[derive(Debug, Default)]
pub struct MockCalls {
    /// Every content request, in order
    pub content_requests: Vec<ContentRequest>,
    /// Every image request, in order
    pub image_requests: Vec<ImageRequest>,
    /// Every video request, in order
    pub video_requests: Vec<VideoRequest>,
    /// Number of operation polls
    pub polls: u32,
    /// Number of downloads
    pub downloads: u32,
}

/// Scripted mock backend implementing every driver trait.
///
/// Content requests (outlines and image edits) consume a queue of scripted
/// responses. Image requests succeed with a deterministic image per call
/// index unless a failure is scripted for that index.
pub struct MockStudio {
    content: Mutex<VecDeque<Result<ContentResponse, GeminiErrorKind>>>,
    image_failures: Vec<(usize, GeminiErrorKind)>,
    video_done_after: Option<u32>,
    video_link: bool,
    calls: Arc<Mutex<MockCalls>>,
}

impl Default for MockStudio {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStudio {
    /// A mock with nothing scripted.
    pub fn new() -> Self {
        Self {
            content: Mutex::new(VecDeque::new()),
            image_failures: Vec::new(),
            video_done_after: Some(0),
            video_link: true,
            calls: Arc::new(Mutex::new(MockCalls::default())),
        }
    }

    /// Queue a content response.
    pub fn with_content(self, response: ContentResponse) -> Self {
        self.content.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a text-only content response.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_content(ContentResponse {
            text: text.into(),
            ..Default::default()
        })
    }

    /// Queue a content response carrying one image.
    pub fn with_edited_image(self, image: ImageRef) -> Self {
        self.with_content(ContentResponse {
            images: vec![image],
            ..Default::default()
        })
    }

    /// Queue a content failure.
    pub fn with_content_error(self, error: GeminiErrorKind) -> Self {
        self.content.lock().unwrap().push_back(Err(error));
        self
    }

    /// Fail the image request with this call index.
    pub fn with_image_failure_at(mut self, index: usize, error: GeminiErrorKind) -> Self {
        self.image_failures.push((index, error));
        self
    }

    /// Report the video job done after `polls` polls; `None` never finishes.
    pub fn with_video_done_after(mut self, polls: Option<u32>) -> Self {
        self.video_done_after = polls;
        self
    }

    /// Finish video jobs without a download link.
    pub fn without_video_link(mut self) -> Self {
        self.video_link = false;
        self
    }

    /// Shared handle to the recorded calls.
    pub fn calls(&self) -> Arc<Mutex<MockCalls>> {
        Arc::clone(&self.calls)
    }

    /// Number of image requests so far.
    pub fn image_call_count(&self) -> usize {
        self.calls.lock().unwrap().image_requests.len()
    }

    /// Number of content requests so far.
    pub fn content_call_count(&self) -> usize {
        self.calls.lock().unwrap().content_requests.len()
    }

    fn finished_operation(&self) -> VideoOperation {
        VideoOperation {
            name: MOCK_OPERATION.to_string(),
            done: true,
            video_uris: if self.video_link {
                vec![MOCK_VIDEO_URI.to_string()]
            } else {
                Vec::new()
            },
        }
    }
}

/// The image the mock returns for the image request with this call index.
pub fn mock_image(index: usize) -> ImageRef {
    ImageRef::from_bytes("image/jpeg", format!("image-{}", index).as_bytes())
}

/// A credential failure as the service reports it.
pub fn invalid_key_error() -> GeminiErrorKind {
    GeminiErrorKind::HttpError {
        status_code: 400,
        message: "API key not valid. Please pass a valid API key.".to_string(),
    }
}

/// A generic service failure.
pub fn overloaded_error() -> GeminiErrorKind {
    GeminiErrorKind::HttpError {
        status_code: 503,
        message: "The model is overloaded. Please try again later.".to_string(),
    }
}

/// A delimited block with the given title.
pub fn delimited_block(title: &str) -> String {
    format!(
        "TITLE: {title}\nCONTENT:\n- {title} point one\n- {title} point two\nIMAGE_PROMPT: A picture of {title}\n"
    )
}

/// A delimited outline of `count` well-formed blocks.
pub fn delimited_outline(count: usize) -> String {
    (0..count)
        .map(|i| format!("---SLIDE---\n{}", delimited_block(&format!("Slide {}", i))))
        .collect()
}

/// A JSON outline of `count` slides.
pub fn json_outline(count: usize) -> String {
    let slides: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "title": format!("Slide {}", i),
                "content": [format!("Point {}a", i), format!("Point {}b", i)],
                "imagePrompt": format!("A picture of slide {}", i),
            })
        })
        .collect();
    serde_json::Value::Array(slides).to_string()
}

#[async_trait]
impl EaselDriver for MockStudio {
    async fn generate_content(&self, req: &ContentRequest) -> EaselResult<ContentResponse> {
        self.calls
            .lock()
            .unwrap()
            .content_requests
            .push(req.clone());

        match self.content.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(kind)) => Err(EaselError::from(GeminiError::new(kind))),
            None => Err(EaselError::from(GeminiError::new(GeminiErrorKind::ApiRequest(
                "Mock content sequence exhausted".to_string(),
            )))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl ImageGeneration for MockStudio {
    async fn generate_images(&self, req: &ImageRequest) -> EaselResult<ImageResponse> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.image_requests.push(req.clone());
            calls.image_requests.len() - 1
        };

        if let Some((_, kind)) = self.image_failures.iter().find(|(i, _)| *i == index) {
            return Err(EaselError::from(GeminiError::new(kind.clone())));
        }

        Ok(ImageResponse {
            images: vec![mock_image(index)],
        })
    }
}

impl ImageEditing for MockStudio {}

#[async_trait]
impl VideoGeneration for MockStudio {
    async fn start_video(&self, req: &VideoRequest) -> EaselResult<VideoOperation> {
        self.calls.lock().unwrap().video_requests.push(req.clone());
        if self.video_done_after == Some(0) {
            Ok(self.finished_operation())
        } else {
            Ok(VideoOperation::pending(MOCK_OPERATION))
        }
    }

    async fn poll_video(&self, operation: &VideoOperation) -> EaselResult<VideoOperation> {
        let polls = {
            let mut calls = self.calls.lock().unwrap();
            calls.polls += 1;
            calls.polls
        };

        match self.video_done_after {
            Some(after) if polls >= after => Ok(self.finished_operation()),
            _ => Ok(VideoOperation::pending(operation.name.clone())),
        }
    }

    async fn download_video(&self, uri: &str) -> EaselResult<Vec<u8>> {
        self.calls.lock().unwrap().downloads += 1;
        assert_eq!(uri, MOCK_VIDEO_URI);
        Ok(MOCK_VIDEO_BYTES.to_vec())
    }
}
