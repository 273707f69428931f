//! Errors raised while turning a model response into slide structures.

/// Which outline protocol a structured response was produced for.
///
/// Script formatting and topic generation fail with different user guidance,
/// so the malformed-structure error remembers which one it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OutlineMode {
    /// A pre-written script was being segmented
    #[display("script")]
    Script,
    /// A topic outline was being generated
    #[display("topic")]
    Topic,
}

/// Specific parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ParseErrorKind {
    /// Structured JSON response failed shape validation
    #[display("Malformed {} structure: {}", mode, detail)]
    MalformedStructure {
        /// Outline protocol the response was requested for
        mode: OutlineMode,
        /// What failed validation
        detail: String,
    },
    /// Delimited text never contained the slide separator
    #[display("The AI response could not be parsed. The slide separator '---SLIDE---' was not found.")]
    SeparatorNotFound,
    /// Delimited text contained no complete slide block
    #[display(
        "The AI returned a response, but it couldn't be formatted into slides. Please try a different topic or wording."
    )]
    NoValidBlocks,
}

impl ParseErrorKind {
    /// Whether this is one of the two "no slides found" variants.
    pub fn is_no_slides(&self) -> bool {
        matches!(self, Self::SeparatorNotFound | Self::NoValidBlocks)
    }

    /// End-user message for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedStructure {
                mode: OutlineMode::Script,
                ..
            } => "The AI failed to format the provided script. Please check the script format and try again."
                .to_string(),
            Self::MalformedStructure {
                mode: OutlineMode::Topic,
                ..
            } => "The AI returned an invalid presentation structure. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Parse error with source location tracking.
///
/// # Examples
///
/// ```
/// use easel_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::SeparatorNotFound);
/// assert!(err.kind.is_no_slides());
/// assert!(format!("{}", err).contains("---SLIDE---"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    /// The specific parse failure
    pub kind: ParseErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a malformed structured response.
    #[track_caller]
    pub fn malformed(mode: OutlineMode, detail: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedStructure {
            mode,
            detail: detail.into(),
        })
    }
}
