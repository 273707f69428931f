//! Outline strategy selection.
//!
//! Picks one of three strategies from the user's intent flags and describes the
//! outbound request for it. No network call happens here.

use crate::{EaselConfig, prompts};
use derive_getters::Getters;
use easel_core::{ContentPart, ContentRequest, GenerationConfig, GenerationParams, Tool};
use easel_error::OutlineMode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Prompts longer than this many characters may be pre-written scripts.
pub const SCRIPT_THRESHOLD_CHARS: usize = 500;

/// Outline generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Segment a pre-written script into slides verbatim
    ScriptParse,
    /// Retrieval-grounded outline in the delimited text protocol
    SearchGrounded,
    /// Topic-to-outline in the structured JSON protocol
    Default,
}

impl GenerationMode {
    /// Response protocol the mode expects.
    pub fn protocol(self) -> OutlineProtocol {
        match self {
            Self::ScriptParse | Self::Default => OutlineProtocol::StructuredJson,
            Self::SearchGrounded => OutlineProtocol::Delimited,
        }
    }

    /// Mode reported by structured-output parse errors.
    pub fn outline_mode(self) -> OutlineMode {
        match self {
            Self::ScriptParse => OutlineMode::Script,
            Self::SearchGrounded | Self::Default => OutlineMode::Topic,
        }
    }
}

/// Wire format of an outline response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlineProtocol {
    /// JSON array of slide objects
    StructuredJson,
    /// Plain text blocks separated by `---SLIDE---`
    Delimited,
}

/// A fully formed outline request and how to read its response.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct OutlinePlan {
    mode: GenerationMode,
    protocol: OutlineProtocol,
    request: ContentRequest,
}

impl OutlinePlan {
    /// Take the request out of the plan.
    pub fn into_request(self) -> ContentRequest {
        self.request
    }
}

/// Whether a prompt reads as a pre-written script.
///
/// True when the prompt is longer than [`SCRIPT_THRESHOLD_CHARS`] characters
/// and contains a line break.
pub fn is_detailed_script(prompt: &str) -> bool {
    prompt.chars().count() > SCRIPT_THRESHOLD_CHARS && prompt.contains(['\n', '\r'])
}

/// Choose the strategy for a set of parameters.
///
/// Script detection wins over both flags; search wins over the default mode.
///
/// # Examples
///
/// ```
/// use easel_core::GenerationParams;
/// use easel_presentation::{GenerationMode, select_mode};
///
/// let params = GenerationParams::builder()
///     .prompt("The history of tea")
///     .slide_count(5u32)
///     .use_search(true)
///     .build()
///     .unwrap();
/// assert_eq!(select_mode(&params), GenerationMode::SearchGrounded);
/// ```
pub fn select_mode(params: &GenerationParams) -> GenerationMode {
    if is_detailed_script(params.prompt()) {
        GenerationMode::ScriptParse
    } else if *params.use_search() {
        GenerationMode::SearchGrounded
    } else {
        GenerationMode::Default
    }
}

/// Build the outline request for already-validated parameters.
#[instrument(skip_all, fields(slide_count = params.slide_count()))]
pub fn plan_outline(params: &GenerationParams, config: &EaselConfig) -> OutlinePlan {
    let mode = select_mode(params);
    let thinking_budget = params
        .use_thinking()
        .then_some(config.outline.thinking_budget);

    let (model, text, generation_config) = match mode {
        GenerationMode::ScriptParse => (
            &config.models.reasoning,
            prompts::script_prompt(params.prompt(), config.outline.script_language.as_deref()),
            structured_config(thinking_budget),
        ),
        GenerationMode::SearchGrounded => (
            &config.models.search,
            prompts::search_prompt(params.prompt(), *params.slide_count()),
            GenerationConfig {
                tools: vec![Tool::GoogleSearch],
                ..Default::default()
            },
        ),
        GenerationMode::Default => (
            if thinking_budget.is_some() {
                &config.models.reasoning
            } else {
                &config.models.outline
            },
            prompts::topic_prompt(params.prompt(), *params.slide_count()),
            structured_config(thinking_budget),
        ),
    };

    debug!(?mode, model = %model, thinking = thinking_budget.is_some(), "Planned outline request");

    OutlinePlan {
        mode,
        protocol: mode.protocol(),
        request: ContentRequest {
            model: model.clone(),
            parts: vec![ContentPart::Text(text)],
            config: generation_config,
        },
    }
}

fn structured_config(thinking_budget: Option<u32>) -> GenerationConfig {
    GenerationConfig {
        response_mime_type: Some("application/json".to_string()),
        response_schema: Some(prompts::presentation_schema()),
        thinking_budget,
        ..Default::default()
    }
}
