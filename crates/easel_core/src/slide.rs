//! Slide structures and finished slides.

use crate::Source;
use serde::{Deserialize, Serialize};

/// Parser output: the text of one slide plus the prompt for its illustration.
///
/// Field names on the wire match the structured-JSON protocol
/// (`title`, `content`, `imagePrompt`).
///
/// # Examples
///
/// ```
/// use easel_core::SlideStructure;
///
/// let structure = SlideStructure::new(
///     "Origins",
///     vec!["Founded in 1887".to_string(), "Grew quickly".to_string()],
///     "A sepia photograph of a young city",
/// );
/// assert_eq!(structure.content_summary(), "Founded in 1887; Grew quickly");
/// assert!(structure.sources.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideStructure {
    /// Slide title
    pub title: String,
    /// Bullet points, in order
    pub content: Vec<String>,
    /// Prompt for the illustrative image
    #[serde(rename = "imagePrompt")]
    pub image_prompt: String,
    /// Citations, when the outline was retrieval-grounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

impl SlideStructure {
    /// Create a slide structure without sources.
    pub fn new(
        title: impl Into<String>,
        content: Vec<String>,
        image_prompt: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content,
            image_prompt: image_prompt.into(),
            sources: None,
        }
    }

    /// Bullet points joined into a single line for image prompting.
    pub fn content_summary(&self) -> String {
        self.content.join("; ")
    }
}

/// A finished, renderable slide.
///
/// `image_url` is either a remote URL or an embedded `data:` reference and is
/// never empty in a completed presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide title
    pub title: String,
    /// Bullet points, in order
    pub content: Vec<String>,
    /// Illustration reference
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Citations carried over from the structure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

impl Slide {
    /// Attach an illustration to a slide structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_core::{Slide, SlideStructure};
    ///
    /// let structure = SlideStructure::new("Intro", vec!["Hello".to_string()], "a sunrise");
    /// let slide = Slide::from_structure(structure, "data:image/jpeg;base64,AAAA");
    /// assert_eq!(slide.title, "Intro");
    /// assert_eq!(slide.image_url, "data:image/jpeg;base64,AAAA");
    /// ```
    pub fn from_structure(structure: SlideStructure, image_url: impl Into<String>) -> Self {
        Self {
            title: structure.title,
            content: structure.content,
            image_url: image_url.into(),
            sources: structure.sources,
        }
    }

    /// Copy of this slide with a different illustration.
    pub fn with_image(&self, image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..self.clone()
        }
    }
}
