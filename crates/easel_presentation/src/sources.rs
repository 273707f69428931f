//! Citation normalization and distribution.

use easel_core::{CitationRef, GroundingChunk, SlideStructure, Source};
use tracing::{debug, warn};

/// Normalize raw citation records to `{uri, title}` pairs.
///
/// A record's link and title are each taken from its web citation first, then
/// its map citation. Records missing either are discarded. Order and
/// duplicates are kept.
pub fn normalize_sources(chunks: &[GroundingChunk]) -> Vec<Source> {
    let normalized: Vec<Source> = chunks
        .iter()
        .filter_map(|chunk| {
            let uri = pick(chunk, |c| c.uri.as_deref())?;
            let title = pick(chunk, |c| c.title.as_deref())?;
            Some(Source::new(uri, title))
        })
        .collect();

    let discarded = chunks.len() - normalized.len();
    if discarded > 0 {
        warn!(discarded, "Discarded incomplete citation records");
    }
    normalized
}

fn pick<'a>(
    chunk: &'a GroundingChunk,
    field: impl Fn(&'a CitationRef) -> Option<&'a str>,
) -> Option<&'a str> {
    [chunk.web.as_ref(), chunk.maps.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(&field)
        .find(|value| !value.is_empty())
}

/// Attach the normalized citation list to every slide.
///
/// Every slide receives the same list. With no records, or none valid, slides
/// pass through without a `sources` field.
///
/// # Examples
///
/// ```
/// use easel_core::{CitationRef, GroundingChunk, SlideStructure};
/// use easel_presentation::merge_sources;
///
/// let slides = vec![
///     SlideStructure::new("A", vec![], "a"),
///     SlideStructure::new("B", vec![], "b"),
/// ];
/// let chunks = vec![GroundingChunk {
///     web: Some(CitationRef {
///         uri: Some("https://example.com".to_string()),
///         title: Some("Example".to_string()),
///     }),
///     maps: None,
/// }];
///
/// let merged = merge_sources(slides, Some(chunks.as_slice()));
/// assert_eq!(merged[0].sources, merged[1].sources);
/// assert_eq!(merged[0].sources.as_ref().map(Vec::len), Some(1));
/// ```
pub fn merge_sources(
    slides: Vec<SlideStructure>,
    chunks: Option<&[GroundingChunk]>,
) -> Vec<SlideStructure> {
    let sources = normalize_sources(chunks.unwrap_or_default());
    if sources.is_empty() {
        return slides;
    }

    debug!(count = sources.len(), "Attaching citations to every slide");
    slides
        .into_iter()
        .map(|slide| SlideStructure {
            sources: Some(sources.clone()),
            ..slide
        })
        .collect()
}
