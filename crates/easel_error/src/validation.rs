//! Pre-flight validation errors.
//!
//! These are raised before any remote call is made, so no state has been
//! touched when one is returned.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Prompt is empty or whitespace only
    #[display("Please enter a topic for your presentation.")]
    EmptyPrompt,
    /// Requested slide count is outside the accepted range
    #[display("Please enter a slide count between {} and {} (got {}).", min, max, count)]
    SlideCountOutOfRange {
        /// Requested count
        count: u32,
        /// Smallest accepted count
        min: u32,
        /// Largest accepted count
        max: u32,
    },
    /// Image edit instruction is empty or whitespace only
    #[display("Please describe the edit to apply to the image.")]
    EmptyEditInstruction,
    /// Slide index does not address an existing slide
    #[display("Slide {} does not exist (presentation has {} slides).", index, len)]
    SlideIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of slides in the collection
        len: usize,
    },
    /// Image reference is not an embedded data URL
    #[display("Image reference is not an embedded image: {}", _0)]
    InvalidImageReference(String),
    /// Aspect ratio is not one of the supported values
    #[display("Unsupported aspect ratio '{}'", _0)]
    InvalidAspectRatio(String),
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use easel_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::SlideCountOutOfRange {
///     count: 31,
///     min: 1,
///     max: 30,
/// });
/// assert!(format!("{}", err).contains("between 1 and 30"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific validation failure
    pub kind: ValidationErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
