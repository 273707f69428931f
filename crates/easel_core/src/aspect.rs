//! Aspect ratios accepted by the image and video services.

use easel_error::{EaselResult, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Aspect ratio for generated images.
///
/// # Examples
///
/// ```
/// use easel_core::AspectRatio;
///
/// let ratio = AspectRatio::parse("4:3").unwrap();
/// assert_eq!(ratio, AspectRatio::Standard);
/// assert_eq!(ratio.to_string(), "4:3");
/// assert!(AspectRatio::parse("2:1").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum AspectRatio {
    /// 1:1
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// 16:9
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Widescreen,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Standard,
    /// 3:4
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    /// Parse a ratio such as `"16:9"`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for any ratio the image service does not accept.
    pub fn parse(value: &str) -> EaselResult<Self> {
        Self::from_str(value.trim()).map_err(|_| {
            ValidationError::new(ValidationErrorKind::InvalidAspectRatio(value.to_string())).into()
        })
    }
}

/// Aspect ratio for generated videos.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum VideoAspectRatio {
    /// 16:9
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
}

impl VideoAspectRatio {
    /// Parse a ratio such as `"9:16"`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for anything other than `16:9` or `9:16`.
    pub fn parse(value: &str) -> EaselResult<Self> {
        Self::from_str(value.trim()).map_err(|_| {
            ValidationError::new(ValidationErrorKind::InvalidAspectRatio(value.to_string())).into()
        })
    }
}
