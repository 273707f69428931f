//! Image generation requests.

use crate::{AspectRatio, ImageRef};
use serde::{Deserialize, Serialize};

/// An image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Model identifier
    pub model: String,
    /// Image prompt
    pub prompt: String,
    /// Number of images to produce
    pub number_of_images: u32,
    /// Output MIME type
    pub output_mime_type: String,
    /// Output aspect ratio
    pub aspect_ratio: AspectRatio,
}

/// Images returned by an image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Generated images, in order
    pub images: Vec<ImageRef>,
}
