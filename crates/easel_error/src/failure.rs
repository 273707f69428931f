//! Caller-facing failure classification.

/// What a caller should do about a failure.
///
/// Every [`EaselError`](crate::EaselError) maps to exactly one kind through
/// [`EaselError::failure_kind`](crate::EaselError::failure_kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FailureKind {
    /// Fix the input and submit again
    #[display("invalid_input")]
    InvalidInput,
    /// Remote JSON did not match the slide shape; try again
    #[display("malformed_structure")]
    MalformedStructure,
    /// Delimited response produced no slides
    #[display("no_slides_found")]
    NoSlidesFound,
    /// Credential is invalid or lacks permission; reselect the key
    #[display("credential")]
    Credential,
    /// A long-running job exceeded its wait budget
    #[display("timeout")]
    Timeout,
    /// The caller abandoned the operation
    #[display("cancelled")]
    Cancelled,
    /// Any other remote failure; try again
    #[display("remote")]
    Remote,
    /// Local failure (configuration, filesystem, serialization)
    #[display("local")]
    Local,
}

/// Message fragments the generation service uses for credential problems.
const CREDENTIAL_MARKERS: [&str; 2] = ["API key not valid", "Requested entity was not found"];

/// Classify a remote failure message.
///
/// The service reports invalid or under-privileged keys only through message
/// text, so this is the single place those substrings are recognized.
///
/// # Examples
///
/// ```
/// use easel_error::{FailureKind, classify_remote_message};
///
/// assert_eq!(
///     classify_remote_message("400: API key not valid. Please pass a valid API key."),
///     FailureKind::Credential,
/// );
/// assert_eq!(classify_remote_message("503 overloaded"), FailureKind::Remote);
/// ```
pub fn classify_remote_message(message: &str) -> FailureKind {
    if CREDENTIAL_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
    {
        FailureKind::Credential
    } else {
        FailureKind::Remote
    }
}
