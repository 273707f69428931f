//! Video generation requests and long-running operations.

use crate::{ImageRef, VideoAspectRatio};
use serde::{Deserialize, Serialize};

/// A video generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRequest {
    /// Model identifier
    pub model: String,
    /// Video prompt
    pub prompt: String,
    /// Number of videos to produce
    pub number_of_videos: u32,
    /// Output resolution, e.g. `720p`
    pub resolution: String,
    /// Output aspect ratio
    pub aspect_ratio: VideoAspectRatio,
    /// Optional seed image
    pub image: Option<ImageRef>,
}

/// Handle to a long-running video generation job.
///
/// # Examples
///
/// ```
/// use easel_core::VideoOperation;
///
/// let pending = VideoOperation::pending("operations/abc");
/// assert!(!pending.done);
/// assert!(pending.first_video_uri().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoOperation {
    /// Operation resource name
    pub name: String,
    /// Whether the job has finished
    pub done: bool,
    /// Download links of generated videos, once done
    pub video_uris: Vec<String>,
}

impl VideoOperation {
    /// An operation that has not finished yet.
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            video_uris: Vec::new(),
        }
    }

    /// First download link, if any.
    pub fn first_video_uri(&self) -> Option<&str> {
        self.video_uris.first().map(String::as_str)
    }
}

/// A downloaded video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAsset {
    /// MIME type, e.g. `video/mp4`
    pub mime_type: String,
    /// Raw video bytes
    pub bytes: Vec<u8>,
}
