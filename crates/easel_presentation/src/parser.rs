//! Outline response parsing.
//!
//! Two protocols produce the same [`SlideStructure`] sequence:
//!
//! - **Structured JSON**: an array of `{title, content, imagePrompt}` objects,
//!   validated as a whole. Any shape violation discards the entire response.
//! - **Delimited text**: blocks separated by `---SLIDE---`, each carrying
//!   line-anchored `TITLE:`, `CONTENT:`, and `IMAGE_PROMPT:` labels. Incomplete
//!   blocks are dropped; the rest keep their source order.

use crate::prompts::SLIDE_SEPARATOR;
use easel_core::SlideStructure;
use easel_error::{EaselResult, OutlineMode, ParseError, ParseErrorKind};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*TITLE:[ \t]*(.*)$").expect("Valid title regex"));

static CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^[ \t]*CONTENT:(.*?)^[ \t]*IMAGE_PROMPT:").expect("Valid content regex")
});

static IMAGE_PROMPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*IMAGE_PROMPT:[ \t]*(.*)$").expect("Valid image prompt regex")
});

/// Parse a delimited text outline.
///
/// # Errors
///
/// - `SeparatorNotFound` if non-empty text never contains `---SLIDE---`
/// - `NoValidBlocks` if no block yields a complete slide
///
/// # Examples
///
/// ```
/// use easel_presentation::parse_delimited;
///
/// let text = "---SLIDE---\nTITLE: Tides\nCONTENT:\n- High\n- Low\nIMAGE_PROMPT: A harbor";
/// let slides = parse_delimited(text).unwrap();
/// assert_eq!(slides[0].title, "Tides");
/// assert_eq!(slides[0].content, vec!["High", "Low"]);
/// ```
#[instrument(skip_all, fields(len = text.len()))]
pub fn parse_delimited(text: &str) -> EaselResult<Vec<SlideStructure>> {
    if !text.trim().is_empty() && !text.contains(SLIDE_SEPARATOR) {
        warn!("Outline response has no slide separator");
        return Err(ParseError::new(ParseErrorKind::SeparatorNotFound).into());
    }

    let mut slides = Vec::new();
    for (position, block) in text
        .split(SLIDE_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .enumerate()
    {
        match parse_block(block) {
            Some(slide) => slides.push(slide),
            None => warn!(position, "Dropping incomplete slide block"),
        }
    }

    if slides.is_empty() {
        return Err(ParseError::new(ParseErrorKind::NoValidBlocks).into());
    }

    debug!(count = slides.len(), "Parsed delimited outline");
    Ok(slides)
}

/// Extract one slide from a single delimited block.
///
/// Returns `None` when any of the three labels is missing, or when the title
/// or image prompt is empty.
pub fn parse_block(block: &str) -> Option<SlideStructure> {
    let title = capture_line(&TITLE, block)?;
    let content = CONTENT.captures(block)?.get(1)?.as_str();
    let image_prompt = capture_line(&IMAGE_PROMPT, block)?;

    let content = content
        .lines()
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix('-').unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Some(SlideStructure::new(title, content, image_prompt))
}

fn capture_line(pattern: &Regex, block: &str) -> Option<String> {
    let value = pattern.captures(block)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse and validate a structured JSON outline.
///
/// A surrounding Markdown code fence is tolerated. `mode` selects the message
/// shown to the user when validation fails.
///
/// # Errors
///
/// Returns `MalformedStructure` if the text is not JSON, is not an array, or
/// any element lacks a string `title`, an array-of-strings `content`, or a
/// string `imagePrompt`.
#[instrument(skip(text), fields(len = text.len()))]
pub fn parse_structured(text: &str, mode: OutlineMode) -> EaselResult<Vec<SlideStructure>> {
    let body = strip_code_fence(text);
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ParseError::malformed(mode, format!("response is not JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(ParseError::malformed(mode, "parsed JSON is not an array").into());
    };

    let slides = items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(item).map_err(|detail| {
            ParseError::malformed(mode, format!("slide {}: {}", index, detail))
        }))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = slides.len(), "Parsed structured outline");
    Ok(slides)
}

fn validate_item(item: &Value) -> Result<SlideStructure, &'static str> {
    let object = item.as_object().ok_or("not an object")?;

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .ok_or("missing string field `title`")?;

    let content = object
        .get("content")
        .and_then(Value::as_array)
        .ok_or("missing array field `content`")?
        .iter()
        .map(|bullet| bullet.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or("`content` must contain only strings")?;

    let image_prompt = object
        .get("imagePrompt")
        .and_then(Value::as_str)
        .ok_or("missing string field `imagePrompt`")?;

    Ok(SlideStructure::new(title, content, image_prompt))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
