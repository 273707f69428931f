//! Google Gemini API client implementation.
//!
//! [`GeminiClient`] talks to the Generative Language REST API and covers
//! every remote call the presentation pipeline makes:
//! - `generateContent` for outlines and image edits
//! - Imagen `predict` for slide illustrations and standalone images
//! - Veo `predictLongRunning` plus operation polling and file download

mod client;
mod conversion;
mod dto;

pub use client::{API_KEY_VARS, DEFAULT_BASE_URL, GeminiClient};
