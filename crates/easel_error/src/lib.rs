//! Error types for the Easel presentation generator.
//!
//! This crate provides the foundation error types used throughout the Easel workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Remote failures carry no structured error code, so [`FailureKind`] and
//! [`classify_remote_message`] translate them into the categories a caller
//! acts on (retry, reselect credential, fix input).
//!
//! # Examples
//!
//! ```
//! use easel_error::{EaselResult, FailureKind, ValidationError, ValidationErrorKind};
//!
//! fn check(prompt: &str) -> EaselResult<()> {
//!     if prompt.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptyPrompt))?
//!     }
//!     Ok(())
//! }
//!
//! let err = check("   ").unwrap_err();
//! assert_eq!(err.failure_kind(), FailureKind::InvalidInput);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod export;
mod failure;
mod gemini;
mod http;
mod job;
mod json;
mod parse;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{EaselError, EaselErrorKind, EaselResult};
pub use export::ExportError;
pub use failure::{FailureKind, classify_remote_message};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use job::{JobError, JobErrorKind};
pub use json::JsonError;
pub use parse::{OutlineMode, ParseError, ParseErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
