//! Source citations attached to slides.

use serde::{Deserialize, Serialize};

/// A normalized citation: a link and its display title.
///
/// # Examples
///
/// ```
/// use easel_core::Source;
///
/// let source = Source::new("https://example.com/history", "A Short History");
/// assert_eq!(source.title, "A Short History");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    /// Link to the cited page
    pub uri: String,
    /// Display title of the cited page
    pub title: String,
}

impl Source {
    /// Create a new source citation.
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}
