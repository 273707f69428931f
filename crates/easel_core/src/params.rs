//! User-facing generation parameters.

use derive_builder::Builder;
use derive_getters::Getters;
use easel_error::{EaselResult, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Smallest slide count a generation run accepts.
pub const MIN_SLIDES: u32 = 1;

/// Largest slide count a generation run accepts.
pub const MAX_SLIDES: u32 = 30;

/// Parameters of one presentation generation run.
///
/// # Examples
///
/// ```
/// use easel_core::GenerationParams;
///
/// let params = GenerationParams::builder()
///     .prompt("The history of coffee")
///     .slide_count(8u32)
///     .use_search(true)
///     .build()
///     .unwrap();
///
/// assert!(params.validate().is_ok());
/// assert!(*params.use_search());
/// assert!(!*params.use_thinking());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), build_fn(error = "easel_error::BuilderError"))]
pub struct GenerationParams {
    /// Topic, or a full pre-written script
    prompt: String,
    /// Requested number of slides
    slide_count: u32,
    /// Request extended reasoning
    #[builder(default)]
    use_thinking: bool,
    /// Request retrieval grounding
    #[builder(default)]
    use_search: bool,
}

impl GenerationParams {
    /// Creates a new builder for `GenerationParams`.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder::default()
    }

    /// Reject input that must never reach the remote service.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the prompt is blank or the slide count is
    /// outside `[MIN_SLIDES, MAX_SLIDES]`.
    pub fn validate(&self) -> EaselResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt).into());
        }
        if !(MIN_SLIDES..=MAX_SLIDES).contains(&self.slide_count) {
            return Err(ValidationError::new(ValidationErrorKind::SlideCountOutOfRange {
                count: self.slide_count,
                min: MIN_SLIDES,
                max: MAX_SLIDES,
            })
            .into());
        }
        Ok(())
    }
}
