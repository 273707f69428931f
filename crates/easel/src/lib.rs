//! Easel - illustrated presentations from a topic or a script
//!
//! Easel asks a hosted generative model for a slide outline, parses the
//! response into slides, illustrates each slide with a generated image, and
//! hands the finished collection to an exporter.
//!
//! # Features
//!
//! - **Three outline strategies**: verbatim script segmentation, search-grounded
//!   outlines with citations, and plain topic outlines
//! - **Progressive assembly**: each slide is published as soon as its image lands
//! - **Per-slide image edits** from a free-text instruction
//! - **Standalone tools**: image generation, image editing, and video jobs
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use easel::{EaselConfig, GeminiClient, GenerationParams, PresentationStudio};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let studio = PresentationStudio::new(GeminiClient::new()?, EaselConfig::load()?);
//!     let params = GenerationParams::builder()
//!         .prompt("The history of tea")
//!         .slide_count(6u32)
//!         .build()?;
//!
//!     let outcome = studio.generate(&params, &CancellationToken::new()).await?;
//!     println!("{} slides", outcome.slides().len());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini, Imagen, and Veo support (default)
//!
//! # Architecture
//!
//! - `easel_error` - Error types and failure classification
//! - `easel_core` - Slides, parameters, and request descriptions
//! - `easel_interface` - Driver, credential, and exporter traits
//! - `easel_models` - Gemini REST implementation
//! - `easel_presentation` - Outline parsing, assembly, and media pipelines
//!
//! This crate (`easel`) re-exports everything for convenience.

// Re-export core crates (always available)
pub use easel_core::*;
pub use easel_error::*;
pub use easel_interface::*;
pub use easel_presentation::*;

// Re-export optional crates based on features
#[cfg(feature = "gemini")]
pub use easel_models::*;

#[cfg(feature = "gemini")]
mod credentials;
mod export;
pub mod telemetry;

#[cfg(feature = "gemini")]
pub use credentials::EnvCredentials;
pub use export::{MANIFEST_FILE, Manifest, ManifestExporter, ManifestSlide};
