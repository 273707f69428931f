//! Long-running job errors (video generation polling).

/// Specific job failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum JobErrorKind {
    /// The job did not report completion within the polling budget
    #[display("Job did not finish after {} status checks ({}s)", attempts, waited_secs)]
    TimedOut {
        /// Status checks performed
        attempts: u32,
        /// Approximate seconds spent waiting
        waited_secs: u64,
    },
    /// The caller cancelled the job
    #[display("Job was cancelled")]
    Cancelled,
    /// The job completed without a downloadable result
    #[display("Video generation completed but no download link was found.")]
    MissingDownloadLink,
}

/// Job error with source location tracking.
///
/// # Examples
///
/// ```
/// use easel_error::{JobError, JobErrorKind};
///
/// let err = JobError::new(JobErrorKind::Cancelled);
/// assert!(format!("{}", err).contains("cancelled"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Job Error: {} at line {} in {}", kind, line, file)]
pub struct JobError {
    /// The specific job failure
    pub kind: JobErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl JobError {
    /// Create a new JobError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: JobErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
