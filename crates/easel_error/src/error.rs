//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ExportError, FailureKind, GeminiError, GeminiErrorKind, HttpError,
    JobError, JobErrorKind, JsonError, ParseError, ValidationError, classify_remote_message,
};

/// Every error condition in the Easel workspace.
///
/// # Examples
///
/// ```
/// use easel_error::{EaselError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: EaselError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum EaselErrorKind {
    /// Pre-flight input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Model response could not be turned into slides
    #[from(ParseError)]
    Parse(ParseError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Long-running job error
    #[from(JobError)]
    Job(JobError),
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Export error
    #[from(ExportError)]
    Export(ExportError),
}

/// Easel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use easel_error::{EaselResult, ConfigError};
///
/// fn might_fail() -> EaselResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Easel Error: {}", _0)]
pub struct EaselError(Box<EaselErrorKind>);

impl EaselError {
    /// Create a new error from a kind.
    pub fn new(kind: EaselErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EaselErrorKind {
        &self.0
    }

    /// Classify this error for the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_error::{EaselError, FailureKind, GeminiError, GeminiErrorKind};
    ///
    /// let err: EaselError = GeminiError::new(GeminiErrorKind::HttpError {
    ///     status_code: 404,
    ///     message: "Requested entity was not found.".to_string(),
    /// })
    /// .into();
    /// assert_eq!(err.failure_kind(), FailureKind::Credential);
    /// ```
    pub fn failure_kind(&self) -> FailureKind {
        match self.kind() {
            EaselErrorKind::Validation(_) => FailureKind::InvalidInput,
            EaselErrorKind::Parse(e) if e.kind.is_no_slides() => FailureKind::NoSlidesFound,
            EaselErrorKind::Parse(_) => FailureKind::MalformedStructure,
            EaselErrorKind::Gemini(e) => match &e.kind {
                GeminiErrorKind::MissingApiKey => FailureKind::Credential,
                GeminiErrorKind::HttpError { message, .. } => classify_remote_message(message),
                GeminiErrorKind::ApiRequest(message) => classify_remote_message(message),
                other => classify_remote_message(&other.to_string()),
            },
            EaselErrorKind::Job(e) => match e.kind {
                JobErrorKind::TimedOut { .. } => FailureKind::Timeout,
                JobErrorKind::Cancelled => FailureKind::Cancelled,
                JobErrorKind::MissingDownloadLink => FailureKind::Remote,
            },
            EaselErrorKind::Http(e) => classify_remote_message(&e.message),
            EaselErrorKind::Json(_)
            | EaselErrorKind::Config(_)
            | EaselErrorKind::Builder(_)
            | EaselErrorKind::Export(_) => FailureKind::Local,
        }
    }

    /// Whether the caller should prompt for a different credential.
    pub fn is_credential_failure(&self) -> bool {
        self.failure_kind() == FailureKind::Credential
    }

    /// Message suitable for showing to the end user.
    ///
    /// Source locations are omitted; the wording points at the corrective
    /// action for the failure kind.
    pub fn user_message(&self) -> String {
        if self.is_credential_failure() {
            return "Your API key is not valid or has insufficient permissions. Please select a valid key."
                .to_string();
        }
        match self.kind() {
            EaselErrorKind::Validation(e) => e.kind.to_string(),
            EaselErrorKind::Parse(e) => e.kind.user_message(),
            EaselErrorKind::Gemini(e) => format!("An error occurred: {}", e.kind),
            EaselErrorKind::Job(e) => format!("An error occurred: {}", e.kind),
            EaselErrorKind::Http(e) => format!("An error occurred: {}", e.message),
            EaselErrorKind::Json(e) => format!("An error occurred: {}", e.message),
            EaselErrorKind::Config(e) => format!("Configuration problem: {}", e.message),
            EaselErrorKind::Builder(e) => format!("An error occurred: {}", e.kind()),
            EaselErrorKind::Export(e) => format!("Failed to export: {}", e.message),
        }
    }
}

// Generic From implementation for any type that converts to EaselErrorKind
impl<T> From<T> for EaselError
where
    T: Into<EaselErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Easel operations.
///
/// # Examples
///
/// ```
/// use easel_error::{EaselResult, HttpError};
///
/// fn fetch_data() -> EaselResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type EaselResult<T> = std::result::Result<T, EaselError>;
