//! Core data types for the Easel presentation generator.
//!
//! This crate provides the data model shared by every Easel crate: slide
//! structures produced by the outline parsers, finished slides, generation
//! parameters, embedded image references, and provider-neutral descriptions
//! of the remote requests the pipeline issues.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aspect;
mod content;
mod image;
mod media;
mod params;
mod slide;
mod source;
mod video;

pub use aspect::{AspectRatio, VideoAspectRatio};
pub use content::{
    CitationRef, ContentPart, ContentRequest, ContentResponse, GenerationConfig, GroundingChunk,
    ResponseModality, Tool,
};
pub use image::{ImageRequest, ImageResponse};
pub use media::ImageRef;
pub use params::{GenerationParams, GenerationParamsBuilder, MAX_SLIDES, MIN_SLIDES};
pub use slide::{Slide, SlideStructure};
pub use source::Source;
pub use video::{VideoAsset, VideoOperation, VideoRequest};
