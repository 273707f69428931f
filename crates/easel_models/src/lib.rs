//! Generation service integrations for Easel.
//!
//! Each provider lives behind its own feature flag.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature (on by default). Covers
//!   text generation, Imagen image generation, image editing, and Veo video jobs.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use easel_core::{ContentPart, ContentRequest};
//! use easel_interface::EaselDriver;
//! use easel_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = ContentRequest {
//!     model: "gemini-2.5-flash".to_string(),
//!     parts: vec![ContentPart::Text("Hello".to_string())],
//!     ..Default::default()
//! };
//! let response = client.generate_content(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! # }
//! ```

mod metrics;

pub use metrics::StudioMetrics;

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{API_KEY_VARS, DEFAULT_BASE_URL, GeminiClient};
