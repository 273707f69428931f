//! Embedded image references.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use easel_error::{EaselResult, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// MIME type assumed when a data URL does not declare an image type.
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// A self-contained image: MIME type plus base64 payload.
///
/// Serializes to and parses from `data:<mime>;base64,<payload>` URLs, which is
/// the form slides store in `image_url`.
///
/// # Examples
///
/// ```
/// use easel_core::ImageRef;
///
/// let image = ImageRef::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
/// assert_eq!(image.mime_type(), "image/png");
/// assert_eq!(image.data(), "iVBORw0KGgo=");
/// assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    mime_type: String,
    data: String,
}

impl ImageRef {
    /// Wrap an already base64-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Parse a `data:` URL.
    ///
    /// A header without an `image/...` type falls back to `image/jpeg`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the reference is not a base64 data URL
    /// or carries no payload.
    pub fn parse(reference: &str) -> EaselResult<Self> {
        let invalid = |reason: &str| {
            ValidationError::new(ValidationErrorKind::InvalidImageReference(reason.to_string()))
        };

        let rest = reference
            .strip_prefix("data:")
            .ok_or_else(|| invalid("missing 'data:' scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| invalid("missing ',' before payload"))?;
        if !header.ends_with(";base64") {
            return Err(invalid("payload is not base64 encoded").into());
        }
        if payload.trim().is_empty() {
            return Err(invalid("empty payload").into());
        }

        let declared = header.trim_end_matches(";base64");
        let mime_type = if declared.starts_with("image/") {
            declared
        } else {
            DEFAULT_IMAGE_MIME
        };

        Ok(Self::new(mime_type, payload.trim()))
    }

    /// MIME type, e.g. `image/jpeg`.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Render as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the payload is not valid base64.
    pub fn decode(&self) -> EaselResult<Vec<u8>> {
        STANDARD.decode(&self.data).map_err(|e| {
            ValidationError::new(ValidationErrorKind::InvalidImageReference(format!(
                "invalid base64 payload: {}",
                e
            )))
            .into()
        })
    }

    /// File extension matching the MIME type.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "jpg",
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_data_url())
    }
}
